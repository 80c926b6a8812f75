use board_core::PositionGenerator;

fn main() {
    for position in PositionGenerator::new() {
        println!("{}", position);
    }
}
