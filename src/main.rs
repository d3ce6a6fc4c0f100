#[tokio::main]
async fn main() {
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("guestbook {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: guestbook [--version]");
      eprintln!("Env: ADMIN_PASSWORD, GUESTBOOK_DATABASE, GUESTBOOK_ADDR, GUESTBOOK_MAX_CONNECTIONS, RUST_LOG");
      return;
    }
  }

  if let Err(e) = guestbook::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
