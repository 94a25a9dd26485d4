use crate::types::Reply;

/// Prints and returns the fixed greeting.
pub fn hello_world() -> Reply<String> {
    let result = String::from("Hello, World Ruby!");
    println!("{result}");

    Reply::ok(result)
}

/// Prints and returns `"Hello {name}"`. `name` is used as given, an empty name yields `"Hello "`.
pub fn hello(name: &str) -> Reply<String> {
    let result = format!("Hello {name}");
    println!("{result}");

    Reply::ok(result)
}

/// Adds two integers. The sum is widened to `i128` so it is exact for any pair of `i64`.
pub fn sum_two_integers(n: i64, m: i64) -> Reply<i128> {
    let result = i128::from(n) + i128::from(m);
    println!("The sum two integers is {result} by Elixir function");

    Reply::ok(result)
}
