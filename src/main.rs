fn main() {
    mcfleet::app::cli::run();
}
