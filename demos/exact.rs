use rcramer::prelude::solve_eqs;
use rcramer::Rational;

fn main() {
    let equations = ["0.5x+y-z=1", "x-0.25y+2z=3", "3x+y+z=0.1"];

    match solve_eqs::<Rational>(&equations) {
        Ok(solution) => {
            println!("x = {}", solution.x);
            println!("y = {}", solution.y);
            println!("z = {}", solution.z);
        }
        Err(err) => eprintln!("{err}"),
    }
}
