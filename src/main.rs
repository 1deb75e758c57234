use peach_chess::errors::ChessErrors;
use peach_chess::match_loop::run_stdio_loop;

fn main() -> Result<(), ChessErrors> {
    run_stdio_loop()
}
