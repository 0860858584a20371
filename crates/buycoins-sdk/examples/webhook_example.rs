/*
[INPUT]:  Webhook token, request body, X-Webhook-Signature header
[OUTPUT]: Verification result and parsed event
[POS]:    Examples - webhook signature verification
[UPDATE]: When the webhook signing scheme changes
*/

use buycoins_sdk::*;

/// Example: Verify a webhook delivery
///
/// A real handler reads the raw body and the X-Webhook-Signature header
/// from the incoming request before parsing the JSON.
fn main() {
    println!("=== BuyCoins Webhook Example ===\n");

    let token = "your-webhook-token";
    let body = r#"{"hook_id":36,"hook_key":"6a622fda","hook_time":1579626696,"hook_signature":"X-Webhook-Signature","payload":{"event":"coins.incoming","data":{"cryptocurrency":"bitcoin","amount":"0.01"}}}"#;

    let verifier = match WebhookVerifier::new(token) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to create verifier: {}", e);
            return;
        }
    };
    let signature = verifier.compute(body.as_bytes());
    println!("{}: {}", WEBHOOK_SIGNATURE_HEADER, signature);

    println!("✓ genuine: {}", is_valid_webhook_request(token, body, &signature));
    println!(
        "✓ tampered: {}",
        is_valid_webhook_request(token, &body.replace("coins", "bank"), &signature)
    );

    match verifier.parse(body.as_bytes(), &signature) {
        Ok(event) => println!("✓ event {:?} with data {}", event.payload.event, event.payload.data),
        Err(e) => eprintln!("Rejected delivery: {}", e),
    }

    println!("\n✓ Webhook example complete");
}
