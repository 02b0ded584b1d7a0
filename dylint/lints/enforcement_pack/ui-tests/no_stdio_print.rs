// Test case for NO_STDIO_PRINT lint

fn bad_println(raw: &str) {
    println!("rejected key: {}", raw);
}

fn bad_eprint(raw: &str) {
    eprint!("rejected key: {}", raw);
}

fn bad_qualified(raw: &str) {
    std::eprintln!("rejected key: {}", raw);
}

fn bad_dbg(raw: &str) {
    dbg!(raw);
}

// Good: structured logging without the key
fn good_tracing() {
    tracing::debug!(kind = "templates", "resource refused");
}

fn main() {
    let raw = "../../etc/passwd";
    bad_println(raw);
    bad_eprint(raw);
    bad_qualified(raw);
    bad_dbg(raw);
    good_tracing();
}
