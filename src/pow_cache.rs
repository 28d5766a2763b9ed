//! Cached powers of small integer bases
//!
//! A [`PowCache`] holds `basis^0, basis^1, ...` for one basis between 3 and
//! 10. It starts empty and grows on demand up to its maximum size; exponents
//! at or beyond the maximum size are computed on every request and never
//! stored.
//!
//! Powers of two are not supported, use shifts.
//!
//! Lookups of already-cached exponents never take a lock. Growth builds a
//! complete replacement table off to the side and publishes it with a
//! single atomic swap, so a reader sees either the old table or the new one
//! in full. Entries are shared between tables through `Arc`; a superseded
//! table is freed as soon as the last reader holding it lets go.

use crate::stdlib::cmp;
use crate::stdlib::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use crate::stdlib::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::stdlib::vec::Vec;
use crate::*;

use arc_swap::ArcSwap;

// const DEFAULT_POW_CACHE_SIZE: usize = ${RUST_BIGINT_EXT_DEFAULT_POW_CACHE_SIZE} or 1024;
include!(concat!(env!("OUT_DIR"), "/default_pow_cache_size.rs"));

/// Smallest basis with a cache
pub const MIN_BASIS: u32 = 3;

/// Largest basis with a cache
pub const MAX_BASIS: u32 = 10;

/// Fewest entries added by a single growth step
const MIN_GROWTH: usize = 64;

/// Extra entries past a missed exponent, so a miss near the end of a
/// growth step does not immediately trigger another
const GROWTH_HEADROOM: usize = 10;

type Table = Vec<Arc<BigInt>>;

/// Grow-only table of the powers of one basis
pub struct PowCache {
    basis: BigInt,

    /// currently published table, never mutated once stored
    table: ArcSwap<Table>,

    max_size: AtomicUsize,

    /// serializes growth and max-size changes
    grow_lock: Mutex<()>,

    /// number of tables published by growth
    #[cfg(test)]
    growths: AtomicUsize,
}

impl PowCache {
    fn new(basis: u32, max_size: usize) -> PowCache {
        debug_assert!((MIN_BASIS..=MAX_BASIS).contains(&basis));

        log::debug!("creating power cache for basis {} (max size {})", basis, max_size);

        PowCache {
            basis: BigInt::from(basis),
            table: ArcSwap::from_pointee(Table::new()),
            max_size: AtomicUsize::new(max_size),
            grow_lock: Mutex::new(()),
            #[cfg(test)]
            growths: AtomicUsize::new(0),
        }
    }

    /// The base of every power in this cache
    pub fn basis(&self) -> &BigInt {
        &self.basis
    }

    /// Upper bound on the number of cached entries; the largest cacheable
    /// exponent is one less than this
    pub fn max_size(&self) -> usize {
        self.max_size.load(AtomicOrdering::Acquire)
    }

    /// Number of entries computed so far
    pub fn len(&self) -> usize {
        self.table.load().len()
    }

    /// True until the first lookup populates the cache
    pub fn is_empty(&self) -> bool {
        self.table.load().is_empty()
    }

    /// Return basis^exponent
    ///
    /// Repeated calls with the same cached exponent return the very same
    /// shared `BigInt`. Exponents at or beyond [`max_size`](Self::max_size)
    /// are computed on each call and not kept.
    ///
    /// ```
    /// let cache = bigint_ext::pow_cache::get_cache(10, 1024).unwrap();
    /// assert_eq!(cache.get(3).to_string(), "1000");
    /// ```
    pub fn get(&self, exponent: usize) -> Arc<BigInt> {
        match self.table.load().get(exponent) {
            Some(value) => Arc::clone(value),
            None => self.get_uncached(exponent),
        }
    }

    #[inline(never)]
    fn get_uncached(&self, exponent: usize) -> Arc<BigInt> {
        if exponent < self.max_size() {
            self.grow_to(exponent)
        } else {
            Arc::new(num_traits::pow(self.basis.clone(), exponent))
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // every published table is complete, a panic elsewhere cannot
        // leave the cache inconsistent
        self.grow_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Extend the table so it includes `exponent`, which must be less
    /// than the maximum size
    fn grow_to(&self, exponent: usize) -> Arc<BigInt> {
        let _guard = self.lock();

        // another thread may have grown the table while we waited
        let current = self.table.load_full();
        if let Some(value) = current.get(exponent) {
            return Arc::clone(value);
        }

        let max_size = self.max_size.load(AtomicOrdering::Acquire);
        let new_len = grown_len(current.len(), exponent, max_size);
        debug_assert!(new_len > exponent);

        log::trace!("growing power cache for basis {} from {} to {} entries", self.basis, current.len(), new_len);

        let mut table = Table::with_capacity(new_len);
        table.extend(current.iter().cloned());

        let mut value = match table.last() {
            Some(last) => &**last * &self.basis,
            None => BigInt::one(),
        };
        while table.len() < new_len {
            let next = &value * &self.basis;
            table.push(Arc::new(value));
            value = next;
        }

        let result = Arc::clone(&table[exponent]);
        self.table.store(Arc::new(table));

        #[cfg(test)]
        self.growths.fetch_add(1, AtomicOrdering::Relaxed);

        result
    }

    /// Raise the maximum size to at least `size`; never lowers it
    fn require_max_size(&self, size: usize) {
        let _guard = self.lock();
        let previous = self.max_size.fetch_max(size, AtomicOrdering::AcqRel);
        if size > previous {
            log::debug!("raised max size of basis {} power cache from {} to {}", self.basis, previous, size);
        }
    }
}

/// Length of the table after growing past `exponent`
fn grown_len(current_len: usize, exponent: usize, max_size: usize) -> usize {
    let wanted = cmp::max(
        exponent.saturating_add(GROWTH_HEADROOM),
        current_len.saturating_add(MIN_GROWTH),
    );
    cmp::min(wanted, max_size)
}

impl fmt::Debug for PowCache {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PowCache")
         .field("basis", &self.basis)
         .field("len", &self.len())
         .field("max_size", &self.max_size())
         .finish()
    }
}


/// Owner of the power caches, at most one per basis
///
/// Most callers want the process-wide registry behind [`get_cache`];
/// separate registries are independent of it and of each other.
#[derive(Debug, Default)]
pub struct PowCacheRegistry {
    caches: Mutex<[Option<Arc<PowCache>>; (MAX_BASIS - MIN_BASIS + 1) as usize]>,
}

impl PowCacheRegistry {
    /// Create a registry with no caches
    pub fn new() -> PowCacheRegistry {
        PowCacheRegistry::default()
    }

    /// Return the cache for `basis`, creating it if absent, with a
    /// maximum size of at least `required_max_size`
    ///
    /// New caches start with a maximum size of
    /// `RUST_BIGINT_EXT_DEFAULT_POW_CACHE_SIZE` (1024 unless configured
    /// at build time). An existing cache's maximum size is raised when
    /// `required_max_size` exceeds it and is otherwise left unchanged.
    ///
    /// ## Errors
    ///
    ///  - BasisOutOfRange: `basis` is not between 3 and 10.
    pub fn get_cache(&self, basis: u32, required_max_size: usize) -> Result<Arc<PowCache>, Error> {
        if !(MIN_BASIS..=MAX_BASIS).contains(&basis) {
            return Err(Error::BasisOutOfRange { basis });
        }
        Ok(self.get_or_create(basis, required_max_size))
    }

    /// Same as `get_cache` for a basis already known to be in range
    pub(crate) fn get_or_create(&self, basis: u32, required_max_size: usize) -> Arc<PowCache> {
        let mut caches = self.caches.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = &mut caches[(basis - MIN_BASIS) as usize];

        let cache = slot.get_or_insert_with(|| Arc::new(PowCache::new(basis, DEFAULT_POW_CACHE_SIZE)));
        cache.require_max_size(required_max_size);
        Arc::clone(cache)
    }
}


lazy_static! {
    static ref GLOBAL_REGISTRY: PowCacheRegistry = PowCacheRegistry::new();
}

/// Return the process-wide cache for `basis`, see [`PowCacheRegistry::get_cache`]
///
/// ```
/// use bigint_ext::pow_cache;
///
/// let cache = pow_cache::get_cache(3, 2000).unwrap();
/// assert!(cache.max_size() >= 2000);
/// assert!(pow_cache::get_cache(2, 1024).is_err());
/// ```
pub fn get_cache(basis: u32, required_max_size: usize) -> Result<Arc<PowCache>, Error> {
    GLOBAL_REGISTRY.get_cache(basis, required_max_size)
}

/// Return the process-wide cache for `basis` without raising its maximum size
pub fn get_default_cache(basis: u32) -> Result<Arc<PowCache>, Error> {
    get_cache(basis, DEFAULT_POW_CACHE_SIZE)
}

/// Process-wide cache of powers of ten, used for digit counting
pub(crate) fn pow10() -> &'static PowCache {
    lazy_static! {
        static ref POW10: Arc<PowCache> = GLOBAL_REGISTRY.get_or_create(10, DEFAULT_POW_CACHE_SIZE);
    }
    &POW10
}
