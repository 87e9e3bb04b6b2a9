use std::io::{self, Write};

use caesar_crack::{BruteForce, CipherBreaker, FrequencyGuided};

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
    let ciphertext = prompt("Enter ciphertext to break: ");

    let strategies: [(&str, Box<dyn CipherBreaker>); 2] = [
        ("brute force", Box::new(BruteForce)),
        ("frequency analysis", Box::new(FrequencyGuided)),
    ];

    let mut shifts = Vec::with_capacity(strategies.len());
    for (name, strategy) in &strategies {
        let result = strategy.break_cipher(&ciphertext);
        println!("\nResults from {} method:", name);
        println!("Shift used: {}", result.shift);
        println!("Plaintext: {}", result.plaintext);
        shifts.push(result.shift);
    }

    if shifts.windows(2).all(|pair| pair[0] == pair[1]) {
        println!(
            "\nBoth methods found the same shift value, which increases confidence in the result."
        );
    } else {
        println!(
            "\nThe methods found different shift values. Review both results to determine which is correct."
        );
    }
}
