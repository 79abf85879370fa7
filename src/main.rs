use crate::responses::error_to_response;
use crate::router::handle;
use crate::sheets::SheetsClient;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod sheets;
mod templates;


fn main() {
    // 1️⃣ Build the sheet client (credentials come from the environment)
    let sheets = match SheetsClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Sheets client init failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the listing provider into the closure
    let result = server.serve(move |req, _info| match handle(req, &sheets) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
