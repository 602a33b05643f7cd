fn main() {
    luau_reconstruct::cli::run();
}
