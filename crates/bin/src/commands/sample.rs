//! Random sample command.

use dotted::{Value, random};
use rand::{SeedableRng, rngs::StdRng};

use crate::cli::SampleArgs;
use crate::output::{OutputFormat, print_value};

/// Run the sample command
pub fn run(document: &Value, args: &SampleArgs, format: OutputFormat) -> dotted::Result<()> {
    let picked = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "Sampling with seeded generator");
            let mut rng = StdRng::seed_from_u64(seed);
            random::get_random_items_with(document, args.count, &mut rng)?
        }
        None => random::get_random_items(document, args.count)?,
    };
    print_value(&Value::List(picked), format)
}
