//! Dataset listing command

use crate::dataset::Dataset;
use colored::Colorize;

/// Print every entry; words and images stay hidden unless `reveal` is set
pub fn print_dataset(dataset: &Dataset, reveal: bool) {
    println!(
        "\n{} ({} entries)\n",
        "BRAINROT DATASET".bright_cyan().bold(),
        dataset.len()
    );

    for (i, entry) in dataset.entries().iter().enumerate() {
        if reveal {
            println!(
                "{:3}. {:<10} {:2} letters  {}",
                i + 1,
                entry.word().bright_yellow(),
                entry.word_len(),
                entry.description()
            );
            println!("     {}", entry.image_url().bright_black());
        } else {
            println!(
                "{:3}. {:2} letters  {}",
                i + 1,
                entry.word_len(),
                entry.description()
            );
        }
    }
}
