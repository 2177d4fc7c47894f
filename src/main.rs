mod error;
mod ai {
    pub mod client;
    pub mod extract;
    pub mod prompts;
}
mod generator;

use ai::extract::Extraction;
use dotenv::dotenv;
use generator::Generator;
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    println!("🤖 STRUCTURED SYSTEM PROMPT GENERATOR");
    println!("Analyzes your system prompt and produces:");
    println!("  1. An optimized system prompt");
    println!("  2. A data requirements table");
    println!("  3. A structured output JSON schema\n");

    let mut api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    let generator = loop {
        match Generator::new(&api_key) {
            Ok(g) => break g,
            Err(e) => {
                eprintln!("❌ {e}");
                api_key = read_api_key()?;
            }
        }
    };

    let stdin = io::stdin();
    loop {
        println!("Enter your system prompt (finish with an empty line; 'reset' to start over, 'quit' to exit):");
        let Some(prompt) = read_multiline(&stdin)? else {
            break;
        };

        if prompt.eq_ignore_ascii_case("quit") || prompt.eq_ignore_ascii_case("exit") {
            break;
        }
        if prompt.eq_ignore_ascii_case("reset") || prompt.is_empty() {
            // Each iteration is already a clean slate
            continue;
        }

        println!("⏳ Processing your system prompt...\n");
        match generator.run(&prompt).await {
            Ok(result) => render(&result),
            Err(e) => eprintln!("❌ Error processing prompt: {e}\n"),
        }
    }

    println!("👋 Done.");
    Ok(())
}

fn read_api_key() -> io::Result<String> {
    print!("Enter your OpenAI API key: ");
    io::stdout().flush()?;

    let mut key = String::new();
    if io::stdin().read_line(&mut key)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no API key provided"));
    }
    Ok(key.trim().to_string())
}

/// Reads lines until a blank line; returns None on end of input.
fn read_multiline(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            return Ok(Some(buffer.trim_end().to_string()));
        }
        buffer.push_str(&line);
        buffer.push('\n');
    }

    if buffer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(buffer.trim_end().to_string()))
    }
}

fn render(result: &Extraction) {
    section("Optimized System Prompt", &result.optimized_prompt);
    section("Data Requirements", &result.data_requirements);
    section("Structured Output JSON", &result.json_schema);
}

fn section(title: &str, body: &str) {
    println!("══════ {title} ══════");
    if body.is_empty() {
        println!("(nothing extracted for this section)");
    } else {
        println!("{body}");
    }
    println!();
}
