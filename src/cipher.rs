use std::io::{self, Write};

use caesar_crack::apply_cipher;

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().expect("Failed to flush stdout");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input.trim_end_matches(['\r', '\n']).to_string()
}

fn main() {
    let plaintext = prompt("Enter plaintext: ");

    let shift = loop {
        match prompt("Enter shift factor (integer): ").trim().parse::<i32>() {
            Ok(value) => break value,
            Err(_) => println!("Please enter a valid integer."),
        }
    };

    println!("Ciphertext: {}", apply_cipher(&plaintext, shift));
}
