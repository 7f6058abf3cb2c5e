use std::{env, fs::read_to_string, process};

use tinyc::{
    display_error, parser::parser::parse, symbol_table::symbol_table::build_symbol_table,
    type_checker::type_checker::type_check,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: tinyc <source file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(2);
        }
    };

    let ast = match parse(source.clone(), Some(String::from(file_name))) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    print!("{}", ast.dump());

    let table = build_symbol_table(&ast);
    print!("{}", table.report());

    let errors = type_check(&ast, Some(String::from(file_name)));
    for error in &errors {
        display_error(error, &source);
    }

    if !errors.is_empty() {
        process::exit(1);
    }
}
