use crate::object::prelude::{Object, NULL};

/// Looks a builtin function up by name. Builtins are consulted only
/// after the environment chain, so a user binding can shadow them.
pub fn builtin(name: &str) -> Option<Object> {
    let (name, func): (&'static str, super::object::BuiltinFunction) = match name {
        "len" => ("len", len),
        "first" => ("first", first),
        "last" => ("last", last),
        "rest" => ("rest", rest),
        "push" => ("push", push),
        "puts" => ("puts", puts),
        _ => return None,
    };

    Some(Object::Builtin { name, func })
}

fn wrong_arguments(got: usize, want: usize) -> Object {
    Object::Error {
        message: format!("wrong number of arguments. got={got}, want={want}"),
    }
}

fn len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arguments(args.len(), 1);
    }

    match &args[0] {
        Object::Str { value } => Object::Integer {
            value: value.chars().count() as i64,
        },
        Object::Array { elements } => Object::Integer {
            value: elements.len() as i64,
        },
        other => Object::Error {
            message: format!("argument to `len` not supported, got {}", other.kind()),
        },
    }
}

fn first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arguments(args.len(), 1);
    }

    match &args[0] {
        Object::Array { elements } => elements.first().cloned().unwrap_or(NULL),
        other => Object::Error {
            message: format!("argument to `first` not supported, got {}", other.kind()),
        },
    }
}

fn last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arguments(args.len(), 1);
    }

    match &args[0] {
        Object::Array { elements } => elements.last().cloned().unwrap_or(NULL),
        other => Object::Error {
            message: format!("argument to `last` not supported, got {}", other.kind()),
        },
    }
}

fn rest(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arguments(args.len(), 1);
    }

    match &args[0] {
        Object::Array { elements } => match elements.split_first() {
            Some((_, rest)) => Object::Array {
                elements: rest.to_vec(),
            },
            None => NULL,
        },
        other => Object::Error {
            message: format!("argument to `rest` not supported, got {}", other.kind()),
        },
    }
}

// Returns a new array; the argument is left untouched.
fn push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return wrong_arguments(args.len(), 2);
    }

    match &args[0] {
        Object::Array { elements } => {
            let mut elements = elements.clone();
            elements.push(args[1].clone());

            Object::Array { elements }
        },
        other => Object::Error {
            message: format!("argument to `push` not supported, got {}", other.kind()),
        },
    }
}

fn puts(args: Vec<Object>) -> Object {
    for arg in &args {
        println!("{arg}");
    }

    NULL
}
