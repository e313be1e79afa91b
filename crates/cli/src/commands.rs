use crate::args::{Config, Variant};
use crate::error::CliError;
use log::info;
use montcrypt_algorithms::curve25519::{self as ec, CurveParams, KeyPair};
use montcrypt_pke::codec::{self, CodecConfig};
use montcrypt_pke::hybrid::{self, additive, XorCiphertext, HEADER_SIZE, XOR_CIPHERTEXT_SIZE};
use rand::{CryptoRng, RngCore};
use std::io::{Read, Write};
use zeroize::Zeroizing;

/// Read the whole message, dropping one trailing line ending
pub fn read_message<R: Read>(mut input: R) -> Result<Vec<u8>, CliError> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

pub fn keygen<R, W>(rng: &mut R, out: &mut W) -> Result<(), CliError>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let curve = CurveParams::curve25519();
    let keys = ec::generate_keypair(&curve, rng)?;
    let secret_hex = Zeroizing::new(hex::encode(keys.secret.as_bytes()));
    writeln!(out, "secret: {}", secret_hex.as_str())?;
    writeln!(out, "public: {}", hex::encode(keys.public.x().to_bytes()))?;
    Ok(())
}

/// Generate a recipient, encrypt `message` with the configured variant,
/// decrypt it again and compare.
pub fn roundtrip<R, W>(
    config: &Config,
    message: &[u8],
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<u8>, CliError>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let curve = CurveParams::curve25519();
    let recipient = ec::generate_keypair(&curve, rng)?;
    writeln!(out, "variant:    {}", config.variant.name())?;
    writeln!(out, "public key: {}", hex::encode(recipient.public.x().to_bytes()))?;

    let recovered = match config.variant {
        Variant::Xor => roundtrip_xor(&curve, &config.codec, &recipient, message, rng, out)?,
        Variant::Additive => {
            roundtrip_additive(&curve, &config.codec, &recipient, message, rng, out)?
        }
    };

    writeln!(out, "recovered:  {}", String::from_utf8_lossy(&recovered))?;
    if recovered != message {
        return Err(CliError::Mismatch);
    }
    info!("round trip of {} bytes succeeded", message.len());
    Ok(recovered)
}

fn roundtrip_xor<R, W>(
    curve: &CurveParams,
    codec: &CodecConfig,
    recipient: &KeyPair,
    message: &[u8],
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<u8>, CliError>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let ciphertext =
        hybrid::encrypt_message(curve, codec, &recipient.public.x(), message, b"", rng)?;
    let blocks = ciphertext.get(HEADER_SIZE..).unwrap_or_default();
    for (i, chunk) in blocks.chunks_exact(XOR_CIPHERTEXT_SIZE).enumerate() {
        let block = XorCiphertext::from_bytes(chunk)?;
        writeln!(out, "block {}: C1 = {}", i, hex::encode(block.c1))?;
        writeln!(out, "         C2 = {}", hex::encode(block.c2))?;
    }
    Ok(hybrid::decrypt_message(
        curve,
        codec,
        &recipient.secret,
        &ciphertext,
        b"",
    )?)
}

fn roundtrip_additive<R, W>(
    curve: &CurveParams,
    codec: &CodecConfig,
    recipient: &KeyPair,
    message: &[u8],
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<u8>, CliError>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let points = codec::encode_message(curve, codec, message)?;
    let mut xs = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let ct = additive::encrypt(curve, &recipient.public, point, rng)?;
        writeln!(out, "block {}: C1 = {}", i, hex::encode(ct.c1.serialize_uncompressed()))?;
        writeln!(out, "         C2 = {}", hex::encode(ct.c2.serialize_uncompressed()))?;
        xs.push(additive::decrypt(curve, &recipient.secret, &ct)?.x());
    }
    Ok(codec::decode_message(codec, &xs)?)
}
