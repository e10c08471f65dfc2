pub(crate) const PROPOSAL_TITLE: &str = "Will you be my";
pub(crate) const PROPOSAL_TITLE_ACCENT: &str = "Valentine?";
pub(crate) const PROPOSAL_SUBTITLE: &str = "Choose wisely... 💕";
pub(crate) const PROPOSAL_HINT: &str = "Hint: The \"No\" button is a bit shy... 😊";
pub(crate) const ACCEPT_LABEL: &str = "Yes! 💖";
pub(crate) const DECLINE_LABEL: &str = "No";

pub(crate) const COVER_TITLE: &str = "A Special Message Awaits... 💌";
pub(crate) const COVER_SUBTITLE: &str = "Click the envelope to reveal your surprise";
pub(crate) const COVER_ACTION: &str = "Open Message 💖";

pub(crate) const LETTER_PARAGRAPHS: &[&str] = &[
    "Yaar sach bolu na, jab aapne propose kara tha na toh dil literally ek second ke liye ruk sa gaya 🥹❤️ Itna time ho gaya hume saath me, aur har ek phase me — chahe hasi ho, stupid fights ho, mood swings ho, ya life ki tensions — hum dono ne ek dusre ko samjha, handle kiya aur kabhi chhoda nahi. Tu sirf meri girlfriend nahi hai, tu meri best friend hai, meri peace hai, meri safe place hai. 🫶",
    "Humne saath me kitna time spend kiya hai — random calls, late night talks, bina wajah hassna, ek dusre ki problems sunna, kabhi advice dena kabhi bas chup chaap saath rehna… aur ye sab moments mere liye kisi treasure se kam nahi hain. Thank you itna patience rakhne ke liye, meri har bakwaas sunne ke liye, meri tension me mere saath khade rehne ke liye, aur mujhe itna special feel karane ke liye.",
    "Aaj se nahi, kaafi time se tu meri Valentine thi… bas aaj official ho gaya 💌❤️",
];

pub(crate) const SHAYARI_INTRO: &str = "Tere naam ek chhoti si shayari:";
pub(crate) const SHAYARI_LINES: &[&str] = &[
    "\"Tere saath har din Valentine jaisa lagta hai,",
    "Teri hasi se mera har gham halka lagta hai.",
    "Tu saath ho toh darr bhi darr nahi lagta,",
    "Sach kahu… tu hi meri duniya, tu hi mera sab lagta hai.\" ❤️✨",
];

pub(crate) const LETTER_CLOSING: &str = "I promise, chahe life kitni bhi busy ya tough ho jaye, main hamesha tere saath khada rahunga. Happy Valentine's Day meri jaan 🫶💖";

pub(crate) const SURPRISE_NOTE: &str = "awww shona meriiii yaar sach m aaj bhot pyaar aa raha aur haan aaj school m merse ek bhot badi galti hui jisme aapka naraz hona jayaz tha now i m feeling guilty and i m sorry baby abh maaf krdo and lets celebrate valentines babyyyy mann kar raha h aapke paas hi aajauuuu babyyy meliiiiiiiii madam jiiii inke aage ek ni chalti meriii but cute bhot h chalo jaldi jaldi padh lo vipul aapka intezaar kr rha h chats pee ohkiee babyy Happiest valentine day cutieeee bacchii";
