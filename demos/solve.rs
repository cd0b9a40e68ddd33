use linsys::prelude::solve_with_steps;

fn main() {
    let equations = ["2x + 3y = 7", "x - y = 1"];

    for method in ["elimination", "substitution", "reduction"] {
        match solve_with_steps(&equations, method) {
            Ok(lines) => println!("{}\n", lines.join("\n")),
            Err(err) => eprintln!("{method}: {err}"),
        }
    }
}
