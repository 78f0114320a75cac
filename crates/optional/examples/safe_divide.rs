use optional::Optional;

fn safe_divide(a: f64, b: f64) -> Optional<f64> {
    if b == 0.0 {
        return Optional::empty();
    }
    Optional::of(a / b)
}

fn main() {
    for (a, b) in [(10.0, 2.0), (10.0, 0.0)] {
        let result = safe_divide(a, b);
        println!("{a} / {b} -> {result}");
        result.if_present_or_else(
            |v| println!("Result: {v}"),
            || println!("Cannot divide by zero"),
        );
    }
}
