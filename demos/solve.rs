use rcramer::prelude::{respond, Settings};

fn main() {
    let equations = ["x+y+z=6", "2x-y+z=3", "x+2y-z=2"];
    println!("{}", respond(&equations, &Settings::default()));
}
