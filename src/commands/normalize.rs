use anyhow::Result;

use crate::core::text::{normalize, strip_articles};

pub fn run(text: &str, articles: bool) -> Result<()> {
    let normalized = normalize(text);
    if articles {
        println!("{}", strip_articles(&normalized));
    } else {
        println!("{}", normalized);
    }
    Ok(())
}
