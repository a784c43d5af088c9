use log::info;
use uuid::Uuid;
use uuidkey::{EntropyStrength, Key, KeyFormat, KeyOptions};

const SAMPLE_UUID: &str = "d1756360-5da0-40df-9926-a76abff5601d";

fn main() {
    // Enable basic logging; set RUST_LOG=info for visibility.
    env_logger::init();

    let uuid = Uuid::parse_str(SAMPLE_UUID).expect("sample UUID is canonical");

    // Encoding with hyphens
    let key = Key::encode(&uuid, KeyFormat::Hyphenated);
    println!("{key}"); // 38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X

    // Encoding without hyphens
    let key = Key::encode(&uuid, KeyFormat::Compact);
    println!("{key}"); // 38QARV01ET0G6Z2CJD9VA2ZZAR0X

    // Decoding with hyphens
    let key = Key::parse("38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X").expect("sample key is valid");
    println!("{}", key.uuid().expect("sample key decodes"));

    // Decoding without hyphens
    let key = Key::parse("38QARV01ET0G6Z2CJD9VA2ZZAR0X").expect("sample key is valid");
    println!("{}", key.uuid().expect("sample key decodes"));

    // Standalone encoding driven by options.
    let options = KeyOptions::new()
        .with_hyphens(true)
        .with_strength(EntropyStrength::Bits256);
    println!("{}", uuidkey::encode_key(&uuid, &options));

    // A fresh API key and its parse-back.
    let api_key = uuidkey::generate("demo", &options).expect("prefix is non-empty");
    println!("{api_key}");
    info!(
        "generated API key for UUID {} with {}-character entropy",
        api_key.uuid().expect("generated key decodes"),
        api_key.entropy().len()
    );

    let parsed = uuidkey::parse_api_key(&api_key.to_string()).expect("round-trip parse");
    println!("{}", parsed.uuid().expect("parsed key decodes"));
}
