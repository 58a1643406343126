//! Random sampling of container values.
//!
//! The generator is a parameter so callers can seed it; [`get_random_items`]
//! uses the thread-local generator.

use rand::{
    Rng,
    seq::{SliceRandom, index},
};

use crate::value::{Value, ValueError};

/// Picks `count` random values from `list` using the thread-local generator.
///
/// See [`get_random_items_with`].
pub fn get_random_items(list: &Value, count: usize) -> Result<Vec<Value>, ValueError> {
    get_random_items_with(list, count, &mut rand::thread_rng())
}

/// Picks `count` distinct elements of `list` uniformly at random.
///
/// Keys are discarded and the result is in random order. If `count` is at
/// least the number of elements, every element is returned, shuffled.
///
/// # Errors
/// Returns [`ValueError::NotAContainer`] if `list` is a scalar.
///
/// ```
/// use dotted::{Value, random};
/// use rand::{SeedableRng, rngs::StdRng};
/// use serde_json::json;
///
/// let list = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let picked = random::get_random_items_with(&list, 2, &mut rng)?;
/// assert_eq!(picked.len(), 2);
/// assert!(picked.iter().all(|v| list.values().any(|orig| orig == v)));
/// # Ok::<(), dotted::ValueError>(())
/// ```
pub fn get_random_items_with<R: Rng + ?Sized>(
    list: &Value,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Value>, ValueError> {
    let list = list.require_container("get_random_items")?;
    let mut values: Vec<&Value> = list.values().collect();

    if count >= values.len() {
        values.shuffle(rng);
        return Ok(values.into_iter().cloned().collect());
    }

    let mut picked: Vec<Value> = index::sample(rng, values.len(), count)
        .into_iter()
        .map(|i| values[i].clone())
        .collect();
    picked.shuffle(rng);
    Ok(picked)
}
