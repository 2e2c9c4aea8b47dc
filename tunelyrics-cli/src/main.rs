use std::process;

#[tokio::main]
async fn main() {
    match tunelyrics::cli::run().await {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
