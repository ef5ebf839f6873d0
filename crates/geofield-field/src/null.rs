//! Process-wide null objects, one per concrete type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

type NullTable = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static NULLS: OnceLock<Mutex<NullTable>> = OnceLock::new();

/// The null object of type `N`, built by `init` on first request.
///
/// Every later call for the same `N` returns the same reference. The
/// object is leaked and lives for the rest of the process. `init` runs
/// under the table lock and must not request another null object.
pub(crate) fn null_object<N: Any + Send + Sync>(init: impl FnOnce() -> N) -> &'static N {
    let table = NULLS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut table = table.lock().unwrap_or_else(PoisonError::into_inner);
    let entry: &'static (dyn Any + Send + Sync) = *table
        .entry(TypeId::of::<N>())
        .or_insert_with(|| {
            let leaked: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(init()));
            tracing::debug!(ty = std::any::type_name::<N>(), "null object created");
            leaked
        });
    entry
        .downcast_ref::<N>()
        .expect("null table is keyed by TypeId")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct A(u32);

    #[derive(Debug)]
    struct B(u32);

    #[derive(Debug)]
    struct C(u32);

    #[test]
    fn same_type_same_address() {
        let a1 = null_object(|| A(1));
        let a2 = null_object(|| A(2));
        assert!(std::ptr::eq(a1, a2));
        assert_eq!(a2.0, 1);
    }

    #[test]
    fn different_types_never_alias() {
        let b = null_object(|| B(0)) as *const B as *const ();
        let c = null_object(|| C(0)) as *const C as *const ();
        assert_ne!(b, c);
    }
}
