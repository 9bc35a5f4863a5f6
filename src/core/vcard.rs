use crate::domain::model::CardRecord;

/// Encodes a card as a vCard 3.0 record. Field order is fixed: FN, ORG,
/// TITLE, TEL, EMAIL, URL, NOTE, framed by BEGIN:VCARD / END:VCARD. The
/// encoder does no I/O; the caller decides where the payload goes.
pub fn encode_contact(card: &CardRecord) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", card.name),
        format!("ORG:{}", card.company),
        format!("TITLE:{}", card.title),
        format!("TEL;TYPE=CELL:{}", card.phone),
        format!("EMAIL;TYPE=INTERNET:{}", card.email),
        format!("URL:{}", card.website),
        format!("NOTE:{}", card.bio),
        "END:VCARD".to_string(),
    ];
    lines.join("\n")
}

/// Download name for the exported contact: the person's name with
/// whitespace runs collapsed to underscores, plus the `.vcf` extension.
pub fn vcf_file_name(card: &CardRecord) -> String {
    let stem: Vec<&str> = card.name.split_whitespace().collect();
    format!("{}.vcf", stem.join("_"))
}
