fn main() {
    akkss::run_app();
}
