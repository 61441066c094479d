use std::io::Write;

use monkey_core::parser::prelude::parse_module;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();

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

                for error in &parsed.errors {
                    let (message, messages) = error.details();

                    println!("Parse error: {message}");
                    if !messages.is_empty() {
                        println!("\t{}", messages.join(";\n\t"));
                    }
                }

                if parsed.errors.is_empty() {
                    println!("{}", parsed.program);
                }
            },
        }
    }
}
