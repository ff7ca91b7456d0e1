/// Example demonstrating SDU framing, FCS checks and stream reassembly
use rustysdu::l2cap::constants::*;
use rustysdu::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("L2CAP SDU Stream Example");
    println!("------------------------");

    let message = b"hello, l2cap";
    let (head, tail) = message.split_at(6);
    let channel_id: u16 = 0x0048;

    // Length fields count everything between the CID and the FCS
    let first_length = u16::try_from(head.len() + 4)?;
    let second_length = u16::try_from(tail.len() + 2)?;
    let total = first_length
        .checked_add(second_length)
        .ok_or(SduError::PacketTooLarge(message.len()))?;

    // First SDU: length, CID, total length, control, payload
    let mut first = Vec::new();
    first.extend_from_slice(&first_length.to_le_bytes());
    first.extend_from_slice(&channel_id.to_le_bytes());
    first.extend_from_slice(&total.to_le_bytes());
    first.extend_from_slice(&0x4000u16.to_le_bytes());
    first.extend_from_slice(head);

    // Continuation SDU: no total length field
    let mut second = Vec::new();
    second.extend_from_slice(&second_length.to_le_bytes());
    second.extend_from_slice(&channel_id.to_le_bytes());
    second.extend_from_slice(&0x8002u16.to_le_bytes());
    second.extend_from_slice(tail);

    let stream = vec![SduFrame::build(first), SduFrame::build(second)];

    for (index, sdu) in stream.iter().enumerate() {
        let offset = if index == 0 {
            SDU_FIRST_PAYLOAD_OFFSET
        } else {
            SDU_CONTINUATION_PAYLOAD_OFFSET
        };

        println!("{}", sdu);
        println!(
            "  payload {}..{}  fcs stored=0x{:04X} computed=0x{:04X}",
            sdu.payload_start(offset)?,
            sdu.payload_end()?,
            sdu.stored_fcs()?,
            sdu.compute_fcs()?
        );
    }

    let packet = Assembler::default().assemble(&stream)?;
    println!(
        "Assembled packet on CID 0x{:04X}: {:?}",
        packet.header.channel_id,
        String::from_utf8_lossy(&packet.payload)
    );

    // Corrupt one payload byte and try again
    let mut corrupted = stream[1].clone().into_bytes();
    corrupted[7] ^= 0x01;
    let broken = vec![stream[0].clone(), SduFrame::new(corrupted)];

    match Assembler::default().assemble(&broken) {
        Ok(_) => println!("Corrupted stream unexpectedly accepted"),
        Err(err) => println!("Corrupted stream rejected: {}", err),
    }

    Ok(())
}
