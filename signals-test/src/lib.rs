use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    rc::Rc,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seed for `key`: read once from the env var of the same name, random when
/// unset or unparsable. Printed so a failing run can be replayed.
fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock()
        .write()
        .map_err(|e| e.to_string())?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    }))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(get_seed(key)?))
}

/// Shared, append-only record of slot invocations. Clones share storage, so a
/// test keeps one copy and moves the others into slots.
pub struct CallLog<T>(Rc<RefCell<Vec<T>>>);

impl<T> CallLog<T> {
    pub fn record(&self, entry: T) {
        self.0.borrow_mut().push(entry);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl<T: Clone> CallLog<T> {
    pub fn entries(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        CallLog(Rc::clone(&self.0))
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        CallLog(Rc::new(RefCell::new(vec![])))
    }
}
