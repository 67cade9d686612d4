fn main() {
    println!("cargo::rustc-check-cfg=cfg(pretty_logs)");
    println!("cargo::rerun-if-env-changed=FOLIO_LOG_PRETTY");
    if std::env::var("FOLIO_LOG_PRETTY").is_ok_and(|x| x == "1") {
        println!("cargo::rustc-cfg=pretty_logs");
    }
}
