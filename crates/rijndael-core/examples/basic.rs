//! Encrypts a short message with each supported key size and decrypts it back.

use rijndael_core::{trim_zero_padding, Rijndael256};

fn main() -> Result<(), rijndael_core::Error> {
    let keys: [&[u8]; 3] = [
        b"1234567890123456",
        b"123456789012345678901234",
        b"12345678901234567890123456789012",
    ];

    for key in keys {
        let cipher = Rijndael256::new(key)?;

        let mut ciphertext = [0u8; 32];
        cipher.encrypt(&mut ciphertext, b"26147368")?;

        let mut plaintext = [0u8; 32];
        cipher.decrypt(&mut plaintext, &ciphertext)?;
        assert_eq!(trim_zero_padding(&plaintext), b"26147368");

        println!("{:?}: {:02x?}", cipher.key_size(), ciphertext);
    }

    println!("example succeeded; every key size round-trips");
    Ok(())
}
