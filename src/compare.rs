/// Strict less-than used by [`MinHeap`](crate::MinHeap) to order its elements.
///
/// Implementations must behave like a strict weak order. Anything else is not
/// detected: the heap stays memory-safe but the extraction order is unspecified.
pub trait Compare<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders elements by their own `PartialOrd` impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd> Compare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders elements with a caller supplied less-than closure.
#[derive(Debug, Clone, Copy)]
pub struct ByFn<F>(pub F);

impl<T, F> Compare<T> for ByFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Orders elements by a key extracted from each of them.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_is_strict() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &2));
        assert!(!Natural.less(&3, &2));
    }

    #[test]
    fn natural_on_floats() {
        assert!(Natural.less(&1.0, &2.2));
        assert!(!Natural.less(&f64::NAN, &1.0));
        assert!(!Natural.less(&1.0, &f64::NAN));
    }

    #[test]
    fn by_fn_reverses() {
        let greater = ByFn(|a: &i32, b: &i32| a > b);
        assert!(greater.less(&5, &1));
        assert!(!greater.less(&1, &5));
    }

    #[test]
    fn by_key_ignores_other_fields() {
        let by_len = ByKey(|s: &&str| s.len());
        assert!(by_len.less(&"ab", &"abc"));
        assert!(!by_len.less(&"xy", &"ab"));
    }
}
