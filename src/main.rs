fn main() {
    deepstation_helper::run();
}
