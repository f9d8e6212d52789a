use crate::output::{Output, OutputFormat};
use crate::ReviewCommands;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use std::path::Path;
use tracing::{debug, info, warn};
use whiskeyclub_config::Config;
use whiskeyclub_domain::{Container, DocumentType, Review, SpiritInfo};

pub fn run_review(cmd: ReviewCommands, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        ReviewCommands::New {
            id,
            spirit_id,
            spirit_name,
            author_id,
            author_name,
        } => {
            let spirit = spirit_from_args(spirit_id, spirit_name);
            let author_id = author_id.or_else(|| config.author.id.clone()).unwrap_or_default();
            let author_name = author_name.or_else(|| config.author.name.clone()).unwrap_or_default();
            new_review(id, spirit, author_id, author_name, output)
        }
        ReviewCommands::Inspect { file } => inspect_document(&file, output),
    }
}

/// No spirit flags at all means no spirit reference.
fn spirit_from_args(spirit_id: Option<String>, spirit_name: Option<String>) -> Option<SpiritInfo> {
    if spirit_id.is_none() && spirit_name.is_none() {
        return None;
    }
    Some(SpiritInfo {
        id: spirit_id,
        name: spirit_name.unwrap_or_default(),
    })
}

fn new_review(
    id: String,
    spirit: Option<SpiritInfo>,
    author_id: String,
    author_name: String,
    output: &Output,
) -> Result<()> {
    let review = Review::new(id, spirit, author_id, author_name).map_err(|e| {
        warn!("Rejected review: {}", e);
        eyre!(e)
    })?;
    info!(
        review_id = review.review_id(),
        spirit_id = review.spirit_id(),
        user_id = review.user_id(),
        "Built review document"
    );

    let document = serde_json::to_value(&review).wrap_err("Failed to serialize review")?;
    output.json(&document);
    Ok(())
}

fn inspect_document(path: &Path, output: &Output) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read document {}", path.display()))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .wrap_err_with(|| format!("{} is not valid JSON", path.display()))?;

    match DocumentType::of_document(&document) {
        Some(DocumentType::Review) => debug!("Document tagged as Review"),
        Some(other) => {
            return Err(eyre!("{} holds a {} document, not a Review", path.display(), other));
        }
        None => warn!("Document has no recognised '{}' tag; reading as Review", DocumentType::TAG_FIELD),
    }

    let review: Review = serde_json::from_value(document)
        .wrap_err_with(|| format!("{} is not a valid review document", path.display()))?;
    info!(review_id = review.review_id(), "Loaded review document");

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            println!("{}", review_table(&review));
            println!("{}", routing_table(&review));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let partition_keys: serde_json::Map<String, serde_json::Value> = routing_keys(&review)
                .into_iter()
                .map(|(container, key)| (container.name().to_string(), key.into()))
                .collect();
            let document = serde_json::to_value(&review).wrap_err("Failed to serialize review")?;
            output.json(&serde_json::json!({
                "review": document,
                "partitionKeys": partition_keys,
            }));
        }
    }
    Ok(())
}

/// Partition key of `review` in every container it is routed to.
fn routing_keys(review: &Review) -> Vec<(Container, &str)> {
    Container::ALL
        .iter()
        .map(|container| (*container, review.partition_key(*container)))
        .collect()
}

fn review_table(review: &Review) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Review").fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold),
        Cell::new(review.id()),
    ]);
    table.add_row(vec![Cell::new("Spirit"), Cell::new(format_spirit(review.spirit()))]);
    table.add_row(vec![Cell::new("Author"), Cell::new(format!("{} ({})", review.author_name(), review.author_id()))]);
    table.add_row(vec![Cell::new("Rating"), Cell::new(format!("{}/5", review.rating()))]);
    table.add_row(vec![Cell::new("Notes"), Cell::new(review.notes())]);
    table.add_row(vec![Cell::new("Created"), Cell::new(review.created().to_rfc3339())]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn routing_table(review: &Review) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Container").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Partition key path").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (container, key) in routing_keys(review) {
        table.add_row(vec![
            Cell::new(container.name()),
            Cell::new(container.partition_key_path()),
            Cell::new(if key.is_empty() { "(empty)" } else { key }),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn format_spirit(spirit: &SpiritInfo) -> String {
    match &spirit.id {
        Some(id) if spirit.name.is_empty() => id.clone(),
        Some(id) => format!("{} ({})", spirit.name, id),
        None => format!("{} (no id)", spirit.name),
    }
}
