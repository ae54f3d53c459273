use routecall::{RequestContext, RoutedCall};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=routecall=trace shows uniquification and fragment handling
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // What a reverse router would hand back for `users.show(id = 42)`
    let call = RoutedCall::from_reference("GET", "/users/42?tab=posts#latest")
        .expect("Failed to build call");
    let request = RequestContext::new(true, "example.com:8443");

    println!("Path: {}", call.path()); // /users/42?tab=posts#latest
    println!(
        "Absolute: {}",
        call.absolute_url_for(&request).expect("Request has a host")
    ); // https://example.com:8443/users/42?tab=posts#latest
    println!(
        "WebSocket: {}",
        call.web_socket_url_for(&request).expect("Request has a host")
    ); // wss://example.com:8443/users/42?tab=posts
    println!("Unique: {}", call.unique()); // /users/42?tab=posts&<token>#latest
    println!("Plain: {}", call.without_fragment().absolute_url(false, "localhost:9000")); // http://localhost:9000/users/42?tab=posts
}
