fn main() -> Result<(), eframe::Error> {
    myworld_frontend::run_frontend()
}
