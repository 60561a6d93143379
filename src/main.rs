use recipe_recommender::{
    session_from_config, ClientConfig, Notice, QueryForm, RecipeDetail, SessionState,
};
use std::env;
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Form values come from a JSON file given on the command line
    let args: Vec<String> = env::args().collect();
    let form_path = args
        .get(1)
        .ok_or("Please provide a path to a JSON form file as an argument")?;
    let raw = tokio::fs::read_to_string(form_path).await?;
    let form: QueryForm = serde_json::from_str(&raw)?;

    let config = ClientConfig::load().unwrap_or_default();
    let mut session = session_from_config(&config)?;

    session.submit(&form).await;
    if let Some(notice) = session.last_notice() {
        println!("{notice}");
        if *session.state() == SessionState::Idle {
            return Ok(());
        }
    }

    let stdin = io::stdin();
    loop {
        if let Some(detail) = session.current_detail() {
            print_detail(detail);
            for step in session.current_instructions().unwrap_or_default() {
                println!("  {step}");
            }
        }

        print!("\nPress enter for the next recipe (q to quit): ");
        io::stdout().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        if line.trim() == "q" {
            break;
        }

        session.next().await;
        match session.last_notice() {
            Some(Notice::EndOfResults) => {
                println!("{}", Notice::EndOfResults);
                break;
            }
            Some(notice) => println!("{notice}"),
            None => {}
        }
    }

    Ok(())
}

fn print_detail(detail: &RecipeDetail) {
    println!("\n== {} ==", detail.name);
    if let Some(description) = &detail.description {
        println!("{description}");
    }
    println!("Meal type: {}", detail.meal_type.join(", "));
    println!("Diet type: {}", detail.diet_type.join(", "));
    println!("Region: {}", detail.region.join(", "));
    println!("Country: {}", detail.country.join(", "));
    println!("Cook time: {}", detail.cook_time);
    println!("Ingredients:");
    for ingredient in &detail.ingredients {
        println!("  - {ingredient}");
    }
    if !detail.nutrition_facts.is_empty() {
        println!("Nutrition facts:");
        let mut facts: Vec<_> = detail.nutrition_facts.iter().collect();
        facts.sort();
        for (name, value) in facts {
            println!("  {name}: {value}");
        }
    }
    if !detail.images.is_empty() {
        println!("Images:");
        for url in &detail.images {
            println!("  {url}");
        }
    }
    println!("Instructions:");
}
