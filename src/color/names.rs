use crate::foundation::core::Rgba8;

/// Standard web color names (the CSS/HTML set, with both `gray` and `grey`).
///
/// `name` must already be trimmed and lowercase.
pub(crate) fn lookup(name: &str) -> Option<Rgba8> {
    let (r, g, b) = match name {
        "indianred" => (0xcd, 0x5c, 0x5c),
        "lightcoral" => (0xf0, 0x80, 0x80),
        "salmon" => (0xfa, 0x80, 0x72),
        "darksalmon" => (0xe9, 0x96, 0x7a),
        "lightsalmon" => (0xff, 0xa0, 0x7a),
        "crimson" => (0xdc, 0x14, 0x3c),
        "red" => (0xff, 0x00, 0x00),
        "firebrick" => (0xb2, 0x22, 0x22),
        "darkred" => (0x8b, 0x00, 0x00),
        "pink" => (0xff, 0xc0, 0xcb),
        "lightpink" => (0xff, 0xb6, 0xc1),
        "hotpink" => (0xff, 0x69, 0xb4),
        "deeppink" => (0xff, 0x14, 0x93),
        "mediumvioletred" => (0xc7, 0x15, 0x85),
        "palevioletred" => (0xdb, 0x70, 0x93),
        "coral" => (0xff, 0x7f, 0x50),
        "tomato" => (0xff, 0x63, 0x47),
        "orangered" => (0xff, 0x45, 0x00),
        "darkorange" => (0xff, 0x8c, 0x00),
        "orange" => (0xff, 0xa5, 0x00),
        "gold" => (0xff, 0xd7, 0x00),
        "yellow" => (0xff, 0xff, 0x00),
        "lightyellow" => (0xff, 0xff, 0xe0),
        "lemonchiffon" => (0xff, 0xfa, 0xcd),
        "lightgoldenrodyellow" => (0xfa, 0xfa, 0xd2),
        "papayawhip" => (0xff, 0xef, 0xd5),
        "moccasin" => (0xff, 0xe4, 0xb5),
        "peachpuff" => (0xff, 0xda, 0xb9),
        "palegoldenrod" => (0xee, 0xe8, 0xaa),
        "khaki" => (0xf0, 0xe6, 0x8c),
        "darkkhaki" => (0xbd, 0xb7, 0x6b),
        "lavender" => (0xe6, 0xe6, 0xfa),
        "thistle" => (0xd8, 0xbf, 0xd8),
        "plum" => (0xdd, 0xa0, 0xdd),
        "violet" => (0xee, 0x82, 0xee),
        "orchid" => (0xda, 0x70, 0xd6),
        "fuchsia" | "magenta" => (0xff, 0x00, 0xff),
        "mediumorchid" => (0xba, 0x55, 0xd3),
        "mediumpurple" => (0x93, 0x70, 0xdb),
        "rebeccapurple" => (0x66, 0x33, 0x99),
        "blueviolet" => (0x8a, 0x2b, 0xe2),
        "darkviolet" => (0x94, 0x00, 0xd3),
        "darkorchid" => (0x99, 0x32, 0xcc),
        "darkmagenta" => (0x8b, 0x00, 0x8b),
        "purple" => (0x80, 0x00, 0x80),
        "indigo" => (0x4b, 0x00, 0x82),
        "slateblue" => (0x6a, 0x5a, 0xcd),
        "darkslateblue" => (0x48, 0x3d, 0x8b),
        "mediumslateblue" => (0x7b, 0x68, 0xee),
        "greenyellow" => (0xad, 0xff, 0x2f),
        "chartreuse" => (0x7f, 0xff, 0x00),
        "lawngreen" => (0x7c, 0xfc, 0x00),
        "lime" => (0x00, 0xff, 0x00),
        "limegreen" => (0x32, 0xcd, 0x32),
        "palegreen" => (0x98, 0xfb, 0x98),
        "lightgreen" => (0x90, 0xee, 0x90),
        "mediumspringgreen" => (0x00, 0xfa, 0x9a),
        "springgreen" => (0x00, 0xff, 0x7f),
        "mediumseagreen" => (0x3c, 0xb3, 0x71),
        "seagreen" => (0x2e, 0x8b, 0x57),
        "forestgreen" => (0x22, 0x8b, 0x22),
        "green" => (0x00, 0x80, 0x00),
        "darkgreen" => (0x00, 0x64, 0x00),
        "yellowgreen" => (0x9a, 0xcd, 0x32),
        "olivedrab" => (0x6b, 0x8e, 0x23),
        "olive" => (0x80, 0x80, 0x00),
        "darkolivegreen" => (0x55, 0x6b, 0x2f),
        "mediumaquamarine" => (0x66, 0xcd, 0xaa),
        "darkseagreen" => (0x8f, 0xbc, 0x8b),
        "lightseagreen" => (0x20, 0xb2, 0xaa),
        "darkcyan" => (0x00, 0x8b, 0x8b),
        "teal" => (0x00, 0x80, 0x80),
        "aqua" | "cyan" => (0x00, 0xff, 0xff),
        "lightcyan" => (0xe0, 0xff, 0xff),
        "paleturquoise" => (0xaf, 0xee, 0xee),
        "aquamarine" => (0x7f, 0xff, 0xd4),
        "turquoise" => (0x40, 0xe0, 0xd0),
        "mediumturquoise" => (0x48, 0xd1, 0xcc),
        "darkturquoise" => (0x00, 0xce, 0xd1),
        "cadetblue" => (0x5f, 0x9e, 0xa0),
        "steelblue" => (0x46, 0x82, 0xb4),
        "lightsteelblue" => (0xb0, 0xc4, 0xde),
        "powderblue" => (0xb0, 0xe0, 0xe6),
        "lightblue" => (0xad, 0xd8, 0xe6),
        "skyblue" => (0x87, 0xce, 0xeb),
        "lightskyblue" => (0x87, 0xce, 0xfa),
        "deepskyblue" => (0x00, 0xbf, 0xff),
        "dodgerblue" => (0x1e, 0x90, 0xff),
        "cornflowerblue" => (0x64, 0x95, 0xed),
        "royalblue" => (0x41, 0x69, 0xe1),
        "blue" => (0x00, 0x00, 0xff),
        "mediumblue" => (0x00, 0x00, 0xcd),
        "darkblue" => (0x00, 0x00, 0x8b),
        "navy" => (0x00, 0x00, 0x80),
        "midnightblue" => (0x19, 0x19, 0x70),
        "cornsilk" => (0xff, 0xf8, 0xdc),
        "blanchedalmond" => (0xff, 0xeb, 0xcd),
        "bisque" => (0xff, 0xe4, 0xc4),
        "navajowhite" => (0xff, 0xde, 0xad),
        "wheat" => (0xf5, 0xde, 0xb3),
        "burlywood" => (0xde, 0xb8, 0x87),
        "tan" => (0xd2, 0xb4, 0x8c),
        "rosybrown" => (0xbc, 0x8f, 0x8f),
        "sandybrown" => (0xf4, 0xa4, 0x60),
        "goldenrod" => (0xda, 0xa5, 0x20),
        "darkgoldenrod" => (0xb8, 0x86, 0x0b),
        "peru" => (0xcd, 0x85, 0x3f),
        "chocolate" => (0xd2, 0x69, 0x1e),
        "saddlebrown" => (0x8b, 0x45, 0x13),
        "sienna" => (0xa0, 0x52, 0x2d),
        "brown" => (0xa5, 0x2a, 0x2a),
        "maroon" => (0x80, 0x00, 0x00),
        "white" => (0xff, 0xff, 0xff),
        "snow" => (0xff, 0xfa, 0xfa),
        "honeydew" => (0xf0, 0xff, 0xf0),
        "mintcream" => (0xf5, 0xff, 0xfa),
        "azure" => (0xf0, 0xff, 0xff),
        "aliceblue" => (0xf0, 0xf8, 0xff),
        "ghostwhite" => (0xf8, 0xf8, 0xff),
        "whitesmoke" => (0xf5, 0xf5, 0xf5),
        "seashell" => (0xff, 0xf5, 0xee),
        "beige" => (0xf5, 0xf5, 0xdc),
        "oldlace" => (0xfd, 0xf5, 0xe6),
        "floralwhite" => (0xff, 0xfa, 0xf0),
        "ivory" => (0xff, 0xff, 0xf0),
        "antiquewhite" => (0xfa, 0xeb, 0xd7),
        "linen" => (0xfa, 0xf0, 0xe6),
        "lavenderblush" => (0xff, 0xf0, 0xf5),
        "mistyrose" => (0xff, 0xe4, 0xe1),
        "gainsboro" => (0xdc, 0xdc, 0xdc),
        "lightgray" | "lightgrey" => (0xd3, 0xd3, 0xd3),
        "silver" => (0xc0, 0xc0, 0xc0),
        "darkgray" | "darkgrey" => (0xa9, 0xa9, 0xa9),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "dimgray" | "dimgrey" => (0x69, 0x69, 0x69),
        "lightslategray" | "lightslategrey" => (0x77, 0x88, 0x99),
        "slategray" | "slategrey" => (0x70, 0x80, 0x90),
        "darkslategray" | "darkslategrey" => (0x2f, 0x4f, 0x4f),
        "black" => (0x00, 0x00, 0x00),
        _ => return None,
    };
    Some(Rgba8::rgb(r, g, b))
}
