/// Naive recursive Fibonacci where both base cases are 1:
/// `fibonacci(0) = fibonacci(1) = 1`, so the sequence starts `1, 1, 2, 3, 5`.
///
/// Runs in exponential time. Results wrap around silently once they no
/// longer fit in a `u32`.
pub fn fibonacci(n: u32) -> u32 {
    match n {
        0 | 1 => 1,
        _ => fibonacci(n - 1).wrapping_add(fibonacci(n - 2)),
    }
}
