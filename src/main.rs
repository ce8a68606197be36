use monkey::Monkey;
use std::env;

fn main() -> Result<(), anyhow::Error> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();

    let mut monkey = Monkey::new();
    match args.len() {
        1 => {
            let filename = args.pop().unwrap();
            monkey.run_file(filename.as_ref())
        }
        2.. => {
            println!("Usage: monkey [script]");
            std::process::exit(64);
        }
        _ => monkey.run_prompt(),
    }
}
