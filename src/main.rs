fn main() {
    asset_launch::app::logging::init();
    asset_launch::app::cli::run();
}
