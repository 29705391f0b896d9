//! Basic usage example for youyaku-core

use youyaku_core::{extract_summary, Config, Input, SummaryExtractor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let story = "I started my career in engineering after college. \
                 At first I faced many challenges. \
                 I learned persistence, made mistakes, and grew. \
                 Now I mentor younger engineers and enjoy sharing knowledge.";

    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    println!("Full story: {story}");
    println!("Summary: {}\n", extract_summary(story, 3));

    // Method 2: Extractor with runtime metadata
    println!("=== Method 2: Extractor with Metadata ===");
    let extractor = SummaryExtractor::new();
    let output = extractor.extract(Input::from_text(story))?;

    println!(
        "Kept {} of {} sentences:",
        output.metadata.selected_count, output.metadata.total_sentences
    );
    for sentence in &output.selected {
        println!("  [{}] {}", sentence.index, sentence.text);
    }
    println!("Extraction took {}ms\n", output.metadata.processing_time_ms);

    // Method 3: Custom configuration
    println!("=== Method 3: Custom Configuration ===");
    let config = Config::builder().max_sentences(2).build();
    let output = SummaryExtractor::with_config(config).extract_text(story)?;
    println!("Two-sentence preview: {}", output.summary);

    Ok(())
}
