use crate::Error;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: usize = 92;

/// Returns the Fibonacci numbers `F_0..=F_n`, starting from `F_0 = F_1 = 1`.
///
/// `n = 0` yields `[1]` and `n = 1` yields `[1, 1]`.
///
/// # Errors
///
/// Returns [`Error::FibonacciOverflow`] if `F_n` does not fit in a `u64`
/// (`n > MAX_FIBONACCI_INDEX`).
pub fn fibonacci_numbers(n: usize) -> Result<Vec<u64>, Error> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(Error::FibonacciOverflow { n });
    }

    let mut numbers = Vec::with_capacity(n + 1);
    numbers.push(1_u64);
    if n == 0 {
        return Ok(numbers);
    }

    numbers.push(1);
    while numbers.len() <= n {
        let len = numbers.len();
        numbers.push(numbers[len - 2] + numbers[len - 1]);
    }

    Ok(numbers)
}
