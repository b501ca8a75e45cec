// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal64::prelude::*;

fn main() {
    println!("=== Decimal64 Example ===\n");

    // Parse prices and quantities from text
    let price: Decimal64 = "101.25".parse().unwrap();
    let quantity = Decimal64::from(3);
    println!("price    = {}", price);
    println!("quantity = {}", quantity);

    // Arithmetic rounds half-even to 16 significant digits
    println!("\n=== Arithmetic ===");
    let notional = price * quantity;
    println!("notional     = {}", notional);
    println!("with fee     = {}", notional + "0.75".parse::<Decimal64>().unwrap());
    println!("per unit     = {}", notional / Decimal64::from(7));
    println!("rounded (2)  = {}", (notional / Decimal64::from(7)).round(2));

    // Saturation instead of errors
    println!("\n=== Special Values ===");
    println!("MAX * 10     = {}", Decimal64::MAX * Decimal64::from(10));
    println!("1 / 0        = {}", Decimal64::ONE / Decimal64::ZERO);
    println!("tiny / 10    = {}", Decimal64::from_parts(1, 255) / Decimal64::from(10));

    // Allocation-free formatting into a caller buffer
    println!("\n=== write_ascii ===");
    let mut buf = [0u8; MAX_ASCII_LEN];
    let len = notional.write_ascii(&mut buf).unwrap();
    println!("{} bytes: {:?}", len, std::str::from_utf8(&buf[..len]).unwrap());

    // Conversions
    println!("\n=== Conversions ===");
    println!("to_f64            = {}", notional.to_f64());
    println!("from_f64(0.1+0.2) = {}", Decimal64::from_f64(0.1 + 0.2));
    println!("to_i64            = {}", notional.to_i64().unwrap());
    println!("to_i64_scaled(2)  = {}", notional.to_i64_scaled(2).unwrap());
    println!("rust_decimal      = {}", notional.to_rust_decimal().unwrap());
    println!("debug             = {:?}", notional);

    match Decimal64::NAN.to_i64() {
        Ok(value) => println!("unexpected: {}", value),
        Err(err) => println!("NaN.to_i64() -> {}", err),
    }
}
