use std::io::Write;

use monkey_core::{
    eval::eval,
    object::prelude::{Environment, Object},
    parser::prelude::parse_module,
};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let stdin = std::io::stdin();

    // one environment for the whole session, so bindings persist
    // across lines
    let env = Environment::new();

    loop {
        let mut input = String::new();

        print!("{PROMPT}");
        std::io::stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {},
            ".exit" => return Ok(()),
            _ => {
                let parsed = parse_module(&input);

                if !parsed.errors.is_empty() {
                    for error in &parsed.errors {
                        let (message, messages) = error.details();

                        println!("Parse error: {message}");
                        if !messages.is_empty() {
                            println!("\t{}", messages.join(";\n\t"));
                        }
                    }

                    continue;
                }

                match eval(&parsed.program, env.clone()) {
                    Object::Null => {},
                    object => println!("{object}"),
                }
            },
        }
    }
}
