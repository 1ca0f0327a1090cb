/// Characters stripped from user input before regrouping.
const SEPARATORS: [char; 3] = ['.', ':', '-'];

/// Length of an **Organizationally unique identifier** in hex digits.
const OUI_LEN: usize = 6;
const OCTETS: usize = 6;

/// Turns a loosely formatted MAC address into `xx:xx:xx:xx:xx:xx`.
///
/// Accepts colon, dash and dotted (`aabb.ccdd.eeff`) notations in any case.
/// A bare OUI (`AABBCC`) is repeated to fill all six octets, so a vendor prefix
/// can be looked up on its own.
///
/// No hex validation is done. Anything that is not 12 digits long still comes
/// out as six groups: short input leaves empty groups and long input is cut
/// after the twelfth character.
pub fn normalize(input: &str) -> String {
    let mut digits: Vec<char> = input
        .to_lowercase()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    if digits.len() == OUI_LEN {
        digits.extend_from_within(..);
    }

    digits
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .chain(std::iter::repeat(String::new()))
        .take(OCTETS)
        .collect::<Vec<String>>()
        .join(":")
}

/// Whether `mac` is already in canonical form: six lower-case hex octets joined by colons.
pub fn is_canonical(mac: &str) -> bool {
    let octets: Vec<&str> = mac.split(':').collect();
    octets.len() == OCTETS
        && octets.iter().all(|octet| {
            octet.len() == 2
                && octet
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
