// Test cases for the power caches, included by pow_cache.rs

use crate::stdlib::ptr;
use crate::stdlib::sync::Barrier;
use std::thread;

mod registry {
    use super::*;

    #[test]
    fn one_cache_per_basis() {
        let registry = PowCacheRegistry::new();
        for basis in MIN_BASIS..=MAX_BASIS {
            let a = registry.get_cache(basis, 1024).unwrap();
            let b = registry.get_cache(basis, 1024).unwrap();
            assert!(Arc::ptr_eq(&a, &b), "basis {}", basis);
            assert_eq!(a.basis(), &BigInt::from(basis));
        }
    }

    #[test]
    fn basis_out_of_range() {
        let registry = PowCacheRegistry::new();
        for basis in [0, 1, 2, 11, 16, u32::MAX] {
            assert_eq!(registry.get_cache(basis, 1024).unwrap_err(), Error::BasisOutOfRange { basis });
        }
    }

    #[test]
    fn registries_are_independent() {
        let a = PowCacheRegistry::new().get_cache(7, 1024).unwrap();
        let b = PowCacheRegistry::new().get_cache(7, 1024).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = PowCacheRegistry::new().get_cache(5, 0).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.max_size(), DEFAULT_POW_CACHE_SIZE);
    }

    #[test]
    fn max_size_never_lowered() {
        let registry = PowCacheRegistry::new();
        let cache = registry.get_cache(4, DEFAULT_POW_CACHE_SIZE + 500).unwrap();
        assert_eq!(cache.max_size(), DEFAULT_POW_CACHE_SIZE + 500);

        registry.get_cache(4, 10).unwrap();
        assert_eq!(cache.max_size(), DEFAULT_POW_CACHE_SIZE + 500);
    }

    #[test]
    fn global_registry() {
        let a = get_cache(10, 1024).unwrap();
        let b = get_default_cache(10).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(ptr::eq(&*a, pow10()));
        assert!(get_default_cache(2).is_err());
    }

    #[test]
    fn concurrent_creation() {
        let registry = Arc::new(PowCacheRegistry::new());

        let handles: Vec<_> = (0..8).map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get_cache(6, 1024 + i).unwrap())
        }).collect();

        let caches: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for cache in caches.iter() {
            assert!(Arc::ptr_eq(cache, &caches[0]));
        }
        assert_eq!(caches[0].max_size(), cmp::max(DEFAULT_POW_CACHE_SIZE, 1024 + 7));
    }
}

mod values {
    use super::*;

    #[test]
    fn all_bases_match_pow() {
        let registry = PowCacheRegistry::new();
        for basis in MIN_BASIS..=MAX_BASIS {
            let cache = registry.get_cache(basis, 1024).unwrap();
            for exponent in (0..300).chain([511, 1000, cache.max_size() - 1]) {
                let expected = num_traits::pow(BigInt::from(basis), exponent);
                assert_eq!(*cache.get(exponent), expected, "{}^{}", basis, exponent);
            }
        }
    }

    #[test]
    fn zeroth_power_is_one() {
        let cache = PowCacheRegistry::new().get_cache(9, 1024).unwrap();
        assert_eq!(*cache.get(0), BigInt::one());
        assert_eq!(*cache.get(1), BigInt::from(9));
    }

    #[test]
    fn beyond_max_size_is_computed() {
        let cache = PowCacheRegistry::new().get_cache(3, 1024).unwrap();
        let max_size = cache.max_size();

        let value = cache.get(max_size);
        assert_eq!(*value, num_traits::pow(BigInt::from(3), max_size));
        assert!(!Arc::ptr_eq(&value, &cache.get(max_size)));
        assert!(cache.is_empty());
    }
}

mod identity {
    use super::*;

    #[test]
    fn repeated_lookup_returns_same_value() {
        let cache = PowCacheRegistry::new().get_cache(3, 1024).unwrap();
        let last = cache.max_size() - 1;
        let a = cache.get(last);
        let b = cache.get(last);

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, num_traits::pow(BigInt::from(3), last));
    }

    #[test]
    fn value_survives_growth() {
        let cache = PowCacheRegistry::new().get_cache(8, 1024).unwrap();
        let early = cache.get(5);
        let late = cache.get(900);
        let early_again = cache.get(5);

        assert_eq!(*late, num_traits::pow(BigInt::from(8), 900));
        assert!(Arc::ptr_eq(&early, &early_again));
        assert_eq!(*early, BigInt::from(32768));
    }

    #[test]
    fn raising_max_size_enables_caching() {
        let registry = PowCacheRegistry::new();
        let cache = registry.get_cache(3, 1024).unwrap();
        let max_size = cache.max_size();

        let a = cache.get(max_size);
        let b = cache.get(max_size);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);

        registry.get_cache(3, max_size + 1000).unwrap();

        let a = cache.get(max_size);
        let b = cache.get(max_size);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, num_traits::pow(BigInt::from(3), max_size));

        let a = cache.get(max_size + 999);
        let b = cache.get(max_size + 999);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, num_traits::pow(BigInt::from(3), max_size + 999));

        let a = cache.get(max_size + 1000);
        assert!(!Arc::ptr_eq(&a, &cache.get(max_size + 1000)));
        assert_eq!(*a, num_traits::pow(BigInt::from(3), max_size + 1000));
    }
}

mod growth {
    use super::*;

    #[test]
    fn grows_by_at_least_min_growth() {
        let cache = PowCacheRegistry::new().get_cache(5, 1024).unwrap();

        cache.get(0);
        assert_eq!(cache.len(), MIN_GROWTH);

        cache.get(MIN_GROWTH);
        assert_eq!(cache.len(), 2 * MIN_GROWTH);
    }

    #[test]
    fn grows_past_missed_exponent() {
        let cache = PowCacheRegistry::new().get_cache(5, 1024).unwrap();

        cache.get(300);
        assert_eq!(cache.len(), 300 + GROWTH_HEADROOM);

        // hits never grow
        cache.get(300 + GROWTH_HEADROOM - 1);
        assert_eq!(cache.len(), 300 + GROWTH_HEADROOM);
    }

    #[test]
    fn growth_capped_at_max_size() {
        let cache = PowCacheRegistry::new().get_cache(7, 1024).unwrap();
        let max_size = cache.max_size();

        cache.get(max_size - 1);
        assert_eq!(cache.len(), max_size);
    }

    #[test]
    fn concurrent_growth() {
        let cache = PowCacheRegistry::new().get_cache(7, 1500).unwrap();

        let handles: Vec<_> = (0..8usize).map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut rng = oorandom::Rand32::new(t as u64);
                for _ in 0..200 {
                    let exponent = rng.rand_range(0..1600) as usize;
                    let expected = num_traits::pow(BigInt::from(7), exponent);
                    assert_eq!(*cache.get(exponent), expected, "7^{}", exponent);
                }
            })
        }).collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= cache.max_size());
    }

    #[test]
    fn waiting_threads_reuse_single_growth() {
        let cache = PowCacheRegistry::new().get_cache(9, 1024).unwrap();
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8).map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.get(500)
            })
        }).collect();

        let values: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for value in values.iter() {
            assert!(Arc::ptr_eq(value, &values[0]));
        }
        assert_eq!(*values[0], num_traits::pow(BigInt::from(9), 500));
        assert_eq!(cache.growths.load(AtomicOrdering::Relaxed), 1);
        assert_eq!(cache.len(), 500 + GROWTH_HEADROOM);
    }

    #[test]
    fn superseded_table_is_released() {
        let cache = PowCacheRegistry::new().get_cache(3, 5_000).unwrap();
        let first = cache.get(10);
        let old_table = Arc::downgrade(&cache.table.load_full());

        for exponent in 0..5_000 {
            cache.get(exponent);
        }

        assert!(old_table.upgrade().is_none());
        assert_eq!(cache.len(), 5_000);
        // entries handed out earlier outlive their table
        assert_eq!(*first, BigInt::from(59049));
        assert!(Arc::ptr_eq(&first, &cache.get(10)));
    }

    #[test]
    fn grown_len_saturates_near_usize_max() {
        assert_eq!(grown_len(0, usize::MAX - 3, usize::MAX), usize::MAX);
        assert_eq!(grown_len(usize::MAX - 3, 0, usize::MAX), usize::MAX);
        assert_eq!(grown_len(0, usize::MAX - 3, usize::MAX - 2), usize::MAX - 2);
    }

    #[test]
    fn grown_len_rules() {
        assert_eq!(grown_len(0, 0, 1024), MIN_GROWTH);
        assert_eq!(grown_len(64, 64, 1024), 64 + MIN_GROWTH);
        assert_eq!(grown_len(0, 300, 1024), 300 + GROWTH_HEADROOM);
        assert_eq!(grown_len(1000, 1020, 1024), 1024);
    }
}
