use rcramer::prelude::{explain_eqs, RenderStyle, Settings};

fn main() {
    let mut settings = Settings::default();
    settings.render.style = RenderStyle::Summary;
    settings.render.precision = Some(6);

    let equations = ["2x+3y+8z=7", "x-4y+6z=1", "3x-y-z=8"];
    match explain_eqs(&equations, &settings) {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(err) => eprintln!("{err}"),
    }
}
