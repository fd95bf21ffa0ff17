//! CSS3 / SVG named colors, one canonical name per distinct value.

use super::palette::PaletteEntry;

pub(crate) const CSS3_COLORS: &[PaletteEntry] = &[
    PaletteEntry::new("aliceblue", [0xf0, 0xf8, 0xff]),
    PaletteEntry::new("antiquewhite", [0xfa, 0xeb, 0xd7]),
    PaletteEntry::new("aquamarine", [0x7f, 0xff, 0xd4]),
    PaletteEntry::new("azure", [0xf0, 0xff, 0xff]),
    PaletteEntry::new("beige", [0xf5, 0xf5, 0xdc]),
    PaletteEntry::new("bisque", [0xff, 0xe4, 0xc4]),
    PaletteEntry::new("black", [0x00, 0x00, 0x00]),
    PaletteEntry::new("blanchedalmond", [0xff, 0xeb, 0xcd]),
    PaletteEntry::new("blue", [0x00, 0x00, 0xff]),
    PaletteEntry::new("blueviolet", [0x8a, 0x2b, 0xe2]),
    PaletteEntry::new("brown", [0xa5, 0x2a, 0x2a]),
    PaletteEntry::new("burlywood", [0xde, 0xb8, 0x87]),
    PaletteEntry::new("cadetblue", [0x5f, 0x9e, 0xa0]),
    PaletteEntry::new("chartreuse", [0x7f, 0xff, 0x00]),
    PaletteEntry::new("chocolate", [0xd2, 0x69, 0x1e]),
    PaletteEntry::new("coral", [0xff, 0x7f, 0x50]),
    PaletteEntry::new("cornflowerblue", [0x64, 0x95, 0xed]),
    PaletteEntry::new("cornsilk", [0xff, 0xf8, 0xdc]),
    PaletteEntry::new("crimson", [0xdc, 0x14, 0x3c]),
    PaletteEntry::new("cyan", [0x00, 0xff, 0xff]),
    PaletteEntry::new("darkblue", [0x00, 0x00, 0x8b]),
    PaletteEntry::new("darkcyan", [0x00, 0x8b, 0x8b]),
    PaletteEntry::new("darkgoldenrod", [0xb8, 0x86, 0x0b]),
    PaletteEntry::new("darkgray", [0xa9, 0xa9, 0xa9]),
    PaletteEntry::new("darkgreen", [0x00, 0x64, 0x00]),
    PaletteEntry::new("darkkhaki", [0xbd, 0xb7, 0x6b]),
    PaletteEntry::new("darkmagenta", [0x8b, 0x00, 0x8b]),
    PaletteEntry::new("darkolivegreen", [0x55, 0x6b, 0x2f]),
    PaletteEntry::new("darkorange", [0xff, 0x8c, 0x00]),
    PaletteEntry::new("darkorchid", [0x99, 0x32, 0xcc]),
    PaletteEntry::new("darkred", [0x8b, 0x00, 0x00]),
    PaletteEntry::new("darksalmon", [0xe9, 0x96, 0x7a]),
    PaletteEntry::new("darkseagreen", [0x8f, 0xbc, 0x8f]),
    PaletteEntry::new("darkslateblue", [0x48, 0x3d, 0x8b]),
    PaletteEntry::new("darkslategray", [0x2f, 0x4f, 0x4f]),
    PaletteEntry::new("darkturquoise", [0x00, 0xce, 0xd1]),
    PaletteEntry::new("darkviolet", [0x94, 0x00, 0xd3]),
    PaletteEntry::new("deeppink", [0xff, 0x14, 0x93]),
    PaletteEntry::new("deepskyblue", [0x00, 0xbf, 0xff]),
    PaletteEntry::new("dimgray", [0x69, 0x69, 0x69]),
    PaletteEntry::new("dodgerblue", [0x1e, 0x90, 0xff]),
    PaletteEntry::new("firebrick", [0xb2, 0x22, 0x22]),
    PaletteEntry::new("floralwhite", [0xff, 0xfa, 0xf0]),
    PaletteEntry::new("forestgreen", [0x22, 0x8b, 0x22]),
    PaletteEntry::new("gainsboro", [0xdc, 0xdc, 0xdc]),
    PaletteEntry::new("ghostwhite", [0xf8, 0xf8, 0xff]),
    PaletteEntry::new("gold", [0xff, 0xd7, 0x00]),
    PaletteEntry::new("goldenrod", [0xda, 0xa5, 0x20]),
    PaletteEntry::new("gray", [0x80, 0x80, 0x80]),
    PaletteEntry::new("green", [0x00, 0x80, 0x00]),
    PaletteEntry::new("greenyellow", [0xad, 0xff, 0x2f]),
    PaletteEntry::new("honeydew", [0xf0, 0xff, 0xf0]),
    PaletteEntry::new("hotpink", [0xff, 0x69, 0xb4]),
    PaletteEntry::new("indianred", [0xcd, 0x5c, 0x5c]),
    PaletteEntry::new("indigo", [0x4b, 0x00, 0x82]),
    PaletteEntry::new("ivory", [0xff, 0xff, 0xf0]),
    PaletteEntry::new("khaki", [0xf0, 0xe6, 0x8c]),
    PaletteEntry::new("lavender", [0xe6, 0xe6, 0xfa]),
    PaletteEntry::new("lavenderblush", [0xff, 0xf0, 0xf5]),
    PaletteEntry::new("lawngreen", [0x7c, 0xfc, 0x00]),
    PaletteEntry::new("lemonchiffon", [0xff, 0xfa, 0xcd]),
    PaletteEntry::new("lightblue", [0xad, 0xd8, 0xe6]),
    PaletteEntry::new("lightcoral", [0xf0, 0x80, 0x80]),
    PaletteEntry::new("lightcyan", [0xe0, 0xff, 0xff]),
    PaletteEntry::new("lightgoldenrodyellow", [0xfa, 0xfa, 0xd2]),
    PaletteEntry::new("lightgray", [0xd3, 0xd3, 0xd3]),
    PaletteEntry::new("lightgreen", [0x90, 0xee, 0x90]),
    PaletteEntry::new("lightpink", [0xff, 0xb6, 0xc1]),
    PaletteEntry::new("lightsalmon", [0xff, 0xa0, 0x7a]),
    PaletteEntry::new("lightseagreen", [0x20, 0xb2, 0xaa]),
    PaletteEntry::new("lightskyblue", [0x87, 0xce, 0xfa]),
    PaletteEntry::new("lightslategray", [0x77, 0x88, 0x99]),
    PaletteEntry::new("lightsteelblue", [0xb0, 0xc4, 0xde]),
    PaletteEntry::new("lightyellow", [0xff, 0xff, 0xe0]),
    PaletteEntry::new("lime", [0x00, 0xff, 0x00]),
    PaletteEntry::new("limegreen", [0x32, 0xcd, 0x32]),
    PaletteEntry::new("linen", [0xfa, 0xf0, 0xe6]),
    PaletteEntry::new("magenta", [0xff, 0x00, 0xff]),
    PaletteEntry::new("maroon", [0x80, 0x00, 0x00]),
    PaletteEntry::new("mediumaquamarine", [0x66, 0xcd, 0xaa]),
    PaletteEntry::new("mediumblue", [0x00, 0x00, 0xcd]),
    PaletteEntry::new("mediumorchid", [0xba, 0x55, 0xd3]),
    PaletteEntry::new("mediumpurple", [0x93, 0x70, 0xdb]),
    PaletteEntry::new("mediumseagreen", [0x3c, 0xb3, 0x71]),
    PaletteEntry::new("mediumslateblue", [0x7b, 0x68, 0xee]),
    PaletteEntry::new("mediumspringgreen", [0x00, 0xfa, 0x9a]),
    PaletteEntry::new("mediumturquoise", [0x48, 0xd1, 0xcc]),
    PaletteEntry::new("mediumvioletred", [0xc7, 0x15, 0x85]),
    PaletteEntry::new("midnightblue", [0x19, 0x19, 0x70]),
    PaletteEntry::new("mintcream", [0xf5, 0xff, 0xfa]),
    PaletteEntry::new("mistyrose", [0xff, 0xe4, 0xe1]),
    PaletteEntry::new("moccasin", [0xff, 0xe4, 0xb5]),
    PaletteEntry::new("navajowhite", [0xff, 0xde, 0xad]),
    PaletteEntry::new("navy", [0x00, 0x00, 0x80]),
    PaletteEntry::new("oldlace", [0xfd, 0xf5, 0xe6]),
    PaletteEntry::new("olive", [0x80, 0x80, 0x00]),
    PaletteEntry::new("olivedrab", [0x6b, 0x8e, 0x23]),
    PaletteEntry::new("orange", [0xff, 0xa5, 0x00]),
    PaletteEntry::new("orangered", [0xff, 0x45, 0x00]),
    PaletteEntry::new("orchid", [0xda, 0x70, 0xd6]),
    PaletteEntry::new("palegoldenrod", [0xee, 0xe8, 0xaa]),
    PaletteEntry::new("palegreen", [0x98, 0xfb, 0x98]),
    PaletteEntry::new("paleturquoise", [0xaf, 0xee, 0xee]),
    PaletteEntry::new("palevioletred", [0xdb, 0x70, 0x93]),
    PaletteEntry::new("papayawhip", [0xff, 0xef, 0xd5]),
    PaletteEntry::new("peachpuff", [0xff, 0xda, 0xb9]),
    PaletteEntry::new("peru", [0xcd, 0x85, 0x3f]),
    PaletteEntry::new("pink", [0xff, 0xc0, 0xcb]),
    PaletteEntry::new("plum", [0xdd, 0xa0, 0xdd]),
    PaletteEntry::new("powderblue", [0xb0, 0xe0, 0xe6]),
    PaletteEntry::new("purple", [0x80, 0x00, 0x80]),
    PaletteEntry::new("red", [0xff, 0x00, 0x00]),
    PaletteEntry::new("rosybrown", [0xbc, 0x8f, 0x8f]),
    PaletteEntry::new("royalblue", [0x41, 0x69, 0xe1]),
    PaletteEntry::new("saddlebrown", [0x8b, 0x45, 0x13]),
    PaletteEntry::new("salmon", [0xfa, 0x80, 0x72]),
    PaletteEntry::new("sandybrown", [0xf4, 0xa4, 0x60]),
    PaletteEntry::new("seagreen", [0x2e, 0x8b, 0x57]),
    PaletteEntry::new("seashell", [0xff, 0xf5, 0xee]),
    PaletteEntry::new("sienna", [0xa0, 0x52, 0x2d]),
    PaletteEntry::new("silver", [0xc0, 0xc0, 0xc0]),
    PaletteEntry::new("skyblue", [0x87, 0xce, 0xeb]),
    PaletteEntry::new("slateblue", [0x6a, 0x5a, 0xcd]),
    PaletteEntry::new("slategray", [0x70, 0x80, 0x90]),
    PaletteEntry::new("snow", [0xff, 0xfa, 0xfa]),
    PaletteEntry::new("springgreen", [0x00, 0xff, 0x7f]),
    PaletteEntry::new("steelblue", [0x46, 0x82, 0xb4]),
    PaletteEntry::new("tan", [0xd2, 0xb4, 0x8c]),
    PaletteEntry::new("teal", [0x00, 0x80, 0x80]),
    PaletteEntry::new("thistle", [0xd8, 0xbf, 0xd8]),
    PaletteEntry::new("tomato", [0xff, 0x63, 0x47]),
    PaletteEntry::new("turquoise", [0x40, 0xe0, 0xd0]),
    PaletteEntry::new("violet", [0xee, 0x82, 0xee]),
    PaletteEntry::new("wheat", [0xf5, 0xde, 0xb3]),
    PaletteEntry::new("white", [0xff, 0xff, 0xff]),
    PaletteEntry::new("whitesmoke", [0xf5, 0xf5, 0xf5]),
    PaletteEntry::new("yellow", [0xff, 0xff, 0x00]),
    PaletteEntry::new("yellowgreen", [0x9a, 0xcd, 0x32]),
];
