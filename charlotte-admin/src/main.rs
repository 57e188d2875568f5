mod api;
mod infrastructure;
mod server;

fn main() {
    server::run();
}
