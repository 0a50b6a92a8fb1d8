//! East Asian Width table: code point ranges classified Fullwidth, Wide or
//! Ambiguous. Generated from the Unicode Character Database 14.0.0
//! (`EastAsianWidth.txt`), adjacent ranges merged.

/// Inclusive, sorted, non-overlapping ranges.
pub(crate) const WIDE_OR_AMBIGUOUS: &[(u32, u32)] = &[
    (0x000A1, 0x000A1), (0x000A4, 0x000A4), (0x000A7, 0x000A8), (0x000AA, 0x000AA),
    (0x000AD, 0x000AE), (0x000B0, 0x000B4), (0x000B6, 0x000BA), (0x000BC, 0x000BF),
    (0x000C6, 0x000C6), (0x000D0, 0x000D0), (0x000D7, 0x000D8), (0x000DE, 0x000E1),
    (0x000E6, 0x000E6), (0x000E8, 0x000EA), (0x000EC, 0x000ED), (0x000F0, 0x000F0),
    (0x000F2, 0x000F3), (0x000F7, 0x000FA), (0x000FC, 0x000FC), (0x000FE, 0x000FE),
    (0x00101, 0x00101), (0x00111, 0x00111), (0x00113, 0x00113), (0x0011B, 0x0011B),
    (0x00126, 0x00127), (0x0012B, 0x0012B), (0x00131, 0x00133), (0x00138, 0x00138),
    (0x0013F, 0x00142), (0x00144, 0x00144), (0x00148, 0x0014B), (0x0014D, 0x0014D),
    (0x00152, 0x00153), (0x00166, 0x00167), (0x0016B, 0x0016B), (0x001CE, 0x001CE),
    (0x001D0, 0x001D0), (0x001D2, 0x001D2), (0x001D4, 0x001D4), (0x001D6, 0x001D6),
    (0x001D8, 0x001D8), (0x001DA, 0x001DA), (0x001DC, 0x001DC), (0x00251, 0x00251),
    (0x00261, 0x00261), (0x002C4, 0x002C4), (0x002C7, 0x002C7), (0x002C9, 0x002CB),
    (0x002CD, 0x002CD), (0x002D0, 0x002D0), (0x002D8, 0x002DB), (0x002DD, 0x002DD),
    (0x002DF, 0x002DF), (0x00300, 0x0036F), (0x00378, 0x00379), (0x00380, 0x00383),
    (0x0038B, 0x0038B), (0x0038D, 0x0038D), (0x00391, 0x003A9), (0x003B1, 0x003C1),
    (0x003C3, 0x003C9), (0x00401, 0x00401), (0x00410, 0x0044F), (0x00451, 0x00451),
    (0x00530, 0x00530), (0x00557, 0x00558), (0x0058B, 0x0058C), (0x00590, 0x00590),
    (0x005C8, 0x005CF), (0x005EB, 0x005EE), (0x005F5, 0x005FF), (0x0070E, 0x0070E),
    (0x0074B, 0x0074C), (0x007B2, 0x007BF), (0x007FB, 0x007FC), (0x0082E, 0x0082F),
    (0x0083F, 0x0083F), (0x0085C, 0x0085D), (0x0085F, 0x0085F), (0x0086B, 0x0086F),
    (0x0088F, 0x0088F), (0x00892, 0x00897), (0x00984, 0x00984), (0x0098D, 0x0098E),
    (0x00991, 0x00992), (0x009A9, 0x009A9), (0x009B1, 0x009B1), (0x009B3, 0x009B5),
    (0x009BA, 0x009BB), (0x009C5, 0x009C6), (0x009C9, 0x009CA), (0x009CF, 0x009D6),
    (0x009D8, 0x009DB), (0x009DE, 0x009DE), (0x009E4, 0x009E5), (0x009FF, 0x00A00),
    (0x00A04, 0x00A04), (0x00A0B, 0x00A0E), (0x00A11, 0x00A12), (0x00A29, 0x00A29),
    (0x00A31, 0x00A31), (0x00A34, 0x00A34), (0x00A37, 0x00A37), (0x00A3A, 0x00A3B),
    (0x00A3D, 0x00A3D), (0x00A43, 0x00A46), (0x00A49, 0x00A4A), (0x00A4E, 0x00A50),
    (0x00A52, 0x00A58), (0x00A5D, 0x00A5D), (0x00A5F, 0x00A65), (0x00A77, 0x00A80),
    (0x00A84, 0x00A84), (0x00A8E, 0x00A8E), (0x00A92, 0x00A92), (0x00AA9, 0x00AA9),
    (0x00AB1, 0x00AB1), (0x00AB4, 0x00AB4), (0x00ABA, 0x00ABB), (0x00AC6, 0x00AC6),
    (0x00ACA, 0x00ACA), (0x00ACE, 0x00ACF), (0x00AD1, 0x00ADF), (0x00AE4, 0x00AE5),
    (0x00AF2, 0x00AF8), (0x00B00, 0x00B00), (0x00B04, 0x00B04), (0x00B0D, 0x00B0E),
    (0x00B11, 0x00B12), (0x00B29, 0x00B29), (0x00B31, 0x00B31), (0x00B34, 0x00B34),
    (0x00B3A, 0x00B3B), (0x00B45, 0x00B46), (0x00B49, 0x00B4A), (0x00B4E, 0x00B54),
    (0x00B58, 0x00B5B), (0x00B5E, 0x00B5E), (0x00B64, 0x00B65), (0x00B78, 0x00B81),
    (0x00B84, 0x00B84), (0x00B8B, 0x00B8D), (0x00B91, 0x00B91), (0x00B96, 0x00B98),
    (0x00B9B, 0x00B9B), (0x00B9D, 0x00B9D), (0x00BA0, 0x00BA2), (0x00BA5, 0x00BA7),
    (0x00BAB, 0x00BAD), (0x00BBA, 0x00BBD), (0x00BC3, 0x00BC5), (0x00BC9, 0x00BC9),
    (0x00BCE, 0x00BCF), (0x00BD1, 0x00BD6), (0x00BD8, 0x00BE5), (0x00BFB, 0x00BFF),
    (0x00C0D, 0x00C0D), (0x00C11, 0x00C11), (0x00C29, 0x00C29), (0x00C3A, 0x00C3B),
    (0x00C45, 0x00C45), (0x00C49, 0x00C49), (0x00C4E, 0x00C54), (0x00C57, 0x00C57),
    (0x00C5B, 0x00C5C), (0x00C5E, 0x00C5F), (0x00C64, 0x00C65), (0x00C70, 0x00C76),
    (0x00C8D, 0x00C8D), (0x00C91, 0x00C91), (0x00CA9, 0x00CA9), (0x00CB4, 0x00CB4),
    (0x00CBA, 0x00CBB), (0x00CC5, 0x00CC5), (0x00CC9, 0x00CC9), (0x00CCE, 0x00CD4),
    (0x00CD7, 0x00CDC), (0x00CDF, 0x00CDF), (0x00CE4, 0x00CE5), (0x00CF0, 0x00CF0),
    (0x00CF3, 0x00CFF), (0x00D0D, 0x00D0D), (0x00D11, 0x00D11), (0x00D45, 0x00D45),
    (0x00D49, 0x00D49), (0x00D50, 0x00D53), (0x00D64, 0x00D65), (0x00D80, 0x00D80),
    (0x00D84, 0x00D84), (0x00D97, 0x00D99), (0x00DB2, 0x00DB2), (0x00DBC, 0x00DBC),
    (0x00DBE, 0x00DBF), (0x00DC7, 0x00DC9), (0x00DCB, 0x00DCE), (0x00DD5, 0x00DD5),
    (0x00DD7, 0x00DD7), (0x00DE0, 0x00DE5), (0x00DF0, 0x00DF1), (0x00DF5, 0x00E00),
    (0x00E3B, 0x00E3E), (0x00E5C, 0x00E80), (0x00E83, 0x00E83), (0x00E85, 0x00E85),
    (0x00E8B, 0x00E8B), (0x00EA4, 0x00EA4), (0x00EA6, 0x00EA6), (0x00EBE, 0x00EBF),
    (0x00EC5, 0x00EC5), (0x00EC7, 0x00EC7), (0x00ECE, 0x00ECF), (0x00EDA, 0x00EDB),
    (0x00EE0, 0x00EFF), (0x00F48, 0x00F48), (0x00F6D, 0x00F70), (0x00F98, 0x00F98),
    (0x00FBD, 0x00FBD), (0x00FCD, 0x00FCD), (0x00FDB, 0x00FFF), (0x010C6, 0x010C6),
    (0x010C8, 0x010CC), (0x010CE, 0x010CF), (0x01100, 0x0115F), (0x01249, 0x01249),
    (0x0124E, 0x0124F), (0x01257, 0x01257), (0x01259, 0x01259), (0x0125E, 0x0125F),
    (0x01289, 0x01289), (0x0128E, 0x0128F), (0x012B1, 0x012B1), (0x012B6, 0x012B7),
    (0x012BF, 0x012BF), (0x012C1, 0x012C1), (0x012C6, 0x012C7), (0x012D7, 0x012D7),
    (0x01311, 0x01311), (0x01316, 0x01317), (0x0135B, 0x0135C), (0x0137D, 0x0137F),
    (0x0139A, 0x0139F), (0x013F6, 0x013F7), (0x013FE, 0x013FF), (0x0169D, 0x0169F),
    (0x016F9, 0x016FF), (0x01716, 0x0171E), (0x01737, 0x0173F), (0x01754, 0x0175F),
    (0x0176D, 0x0176D), (0x01771, 0x01771), (0x01774, 0x0177F), (0x017DE, 0x017DF),
    (0x017EA, 0x017EF), (0x017FA, 0x017FF), (0x0181A, 0x0181F), (0x01879, 0x0187F),
    (0x018AB, 0x018AF), (0x018F6, 0x018FF), (0x0191F, 0x0191F), (0x0192C, 0x0192F),
    (0x0193C, 0x0193F), (0x01941, 0x01943), (0x0196E, 0x0196F), (0x01975, 0x0197F),
    (0x019AC, 0x019AF), (0x019CA, 0x019CF), (0x019DB, 0x019DD), (0x01A1C, 0x01A1D),
    (0x01A5F, 0x01A5F), (0x01A7D, 0x01A7E), (0x01A8A, 0x01A8F), (0x01A9A, 0x01A9F),
    (0x01AAE, 0x01AAF), (0x01ACF, 0x01AFF), (0x01B4D, 0x01B4F), (0x01B7F, 0x01B7F),
    (0x01BF4, 0x01BFB), (0x01C38, 0x01C3A), (0x01C4A, 0x01C4C), (0x01C89, 0x01C8F),
    (0x01CBB, 0x01CBC), (0x01CC8, 0x01CCF), (0x01CFB, 0x01CFF), (0x01F16, 0x01F17),
    (0x01F1E, 0x01F1F), (0x01F46, 0x01F47), (0x01F4E, 0x01F4F), (0x01F58, 0x01F58),
    (0x01F5A, 0x01F5A), (0x01F5C, 0x01F5C), (0x01F5E, 0x01F5E), (0x01F7E, 0x01F7F),
    (0x01FB5, 0x01FB5), (0x01FC5, 0x01FC5), (0x01FD4, 0x01FD5), (0x01FDC, 0x01FDC),
    (0x01FF0, 0x01FF1), (0x01FF5, 0x01FF5), (0x01FFF, 0x01FFF), (0x02010, 0x02010),
    (0x02013, 0x02016), (0x02018, 0x02019), (0x0201C, 0x0201D), (0x02020, 0x02022),
    (0x02024, 0x02027), (0x02030, 0x02030), (0x02032, 0x02033), (0x02035, 0x02035),
    (0x0203B, 0x0203B), (0x0203E, 0x0203E), (0x02065, 0x02065), (0x02072, 0x02074),
    (0x0207F, 0x0207F), (0x02081, 0x02084), (0x0208F, 0x0208F), (0x0209D, 0x0209F),
    (0x020AC, 0x020AC), (0x020C1, 0x020CF), (0x020F1, 0x020FF), (0x02103, 0x02103),
    (0x02105, 0x02105), (0x02109, 0x02109), (0x02113, 0x02113), (0x02116, 0x02116),
    (0x02121, 0x02122), (0x02126, 0x02126), (0x0212B, 0x0212B), (0x02153, 0x02154),
    (0x0215B, 0x0215E), (0x02160, 0x0216B), (0x02170, 0x02179), (0x02189, 0x02189),
    (0x0218C, 0x02199), (0x021B8, 0x021B9), (0x021D2, 0x021D2), (0x021D4, 0x021D4),
    (0x021E7, 0x021E7), (0x02200, 0x02200), (0x02202, 0x02203), (0x02207, 0x02208),
    (0x0220B, 0x0220B), (0x0220F, 0x0220F), (0x02211, 0x02211), (0x02215, 0x02215),
    (0x0221A, 0x0221A), (0x0221D, 0x02220), (0x02223, 0x02223), (0x02225, 0x02225),
    (0x02227, 0x0222C), (0x0222E, 0x0222E), (0x02234, 0x02237), (0x0223C, 0x0223D),
    (0x02248, 0x02248), (0x0224C, 0x0224C), (0x02252, 0x02252), (0x02260, 0x02261),
    (0x02264, 0x02267), (0x0226A, 0x0226B), (0x0226E, 0x0226F), (0x02282, 0x02283),
    (0x02286, 0x02287), (0x02295, 0x02295), (0x02299, 0x02299), (0x022A5, 0x022A5),
    (0x022BF, 0x022BF), (0x02312, 0x02312), (0x0231A, 0x0231B), (0x02329, 0x0232A),
    (0x023E9, 0x023EC), (0x023F0, 0x023F0), (0x023F3, 0x023F3), (0x02427, 0x0243F),
    (0x0244B, 0x024E9), (0x024EB, 0x0254B), (0x02550, 0x02573), (0x02580, 0x0258F),
    (0x02592, 0x02595), (0x025A0, 0x025A1), (0x025A3, 0x025A9), (0x025B2, 0x025B3),
    (0x025B6, 0x025B7), (0x025BC, 0x025BD), (0x025C0, 0x025C1), (0x025C6, 0x025C8),
    (0x025CB, 0x025CB), (0x025CE, 0x025D1), (0x025E2, 0x025E5), (0x025EF, 0x025EF),
    (0x025FD, 0x025FE), (0x02605, 0x02606), (0x02609, 0x02609), (0x0260E, 0x0260F),
    (0x02614, 0x02615), (0x0261C, 0x0261C), (0x0261E, 0x0261E), (0x02640, 0x02640),
    (0x02642, 0x02642), (0x02648, 0x02653), (0x02660, 0x02661), (0x02663, 0x02665),
    (0x02667, 0x0266A), (0x0266C, 0x0266D), (0x0266F, 0x0266F), (0x0267F, 0x0267F),
    (0x02693, 0x02693), (0x0269E, 0x0269F), (0x026A1, 0x026A1), (0x026AA, 0x026AB),
    (0x026BD, 0x026BF), (0x026C4, 0x026E1), (0x026E3, 0x026E3), (0x026E8, 0x026FF),
    (0x02705, 0x02705), (0x0270A, 0x0270B), (0x02728, 0x02728), (0x0273D, 0x0273D),
    (0x0274C, 0x0274C), (0x0274E, 0x0274E), (0x02753, 0x02755), (0x02757, 0x02757),
    (0x02776, 0x0277F), (0x02795, 0x02797), (0x027B0, 0x027B0), (0x027BF, 0x027BF),
    (0x02B1B, 0x02B1C), (0x02B50, 0x02B50), (0x02B55, 0x02B59), (0x02B74, 0x02B75),
    (0x02B96, 0x02B96), (0x02CF4, 0x02CF8), (0x02D26, 0x02D26), (0x02D28, 0x02D2C),
    (0x02D2E, 0x02D2F), (0x02D68, 0x02D6E), (0x02D71, 0x02D7E), (0x02D97, 0x02D9F),
    (0x02DA7, 0x02DA7), (0x02DAF, 0x02DAF), (0x02DB7, 0x02DB7), (0x02DBF, 0x02DBF),
    (0x02DC7, 0x02DC7), (0x02DCF, 0x02DCF), (0x02DD7, 0x02DD7), (0x02DDF, 0x02DDF),
    (0x02E5E, 0x0303E), (0x03040, 0x04DBF), (0x04E00, 0x0A4CF), (0x0A62C, 0x0A63F),
    (0x0A6F8, 0x0A6FF), (0x0A7CB, 0x0A7CF), (0x0A7D2, 0x0A7D2), (0x0A7D4, 0x0A7D4),
    (0x0A7DA, 0x0A7F1), (0x0A82D, 0x0A82F), (0x0A83A, 0x0A83F), (0x0A878, 0x0A87F),
    (0x0A8C6, 0x0A8CD), (0x0A8DA, 0x0A8DF), (0x0A954, 0x0A95E), (0x0A960, 0x0A97F),
    (0x0A9CE, 0x0A9CE), (0x0A9DA, 0x0A9DD), (0x0A9FF, 0x0A9FF), (0x0AA37, 0x0AA3F),
    (0x0AA4E, 0x0AA4F), (0x0AA5A, 0x0AA5B), (0x0AAC3, 0x0AADA), (0x0AAF7, 0x0AB00),
    (0x0AB07, 0x0AB08), (0x0AB0F, 0x0AB10), (0x0AB17, 0x0AB1F), (0x0AB27, 0x0AB27),
    (0x0AB2F, 0x0AB2F), (0x0AB6C, 0x0AB6F), (0x0ABEE, 0x0ABEF), (0x0ABFA, 0x0D7AF),
    (0x0D7C7, 0x0D7CA), (0x0D7FC, 0x0D7FF), (0x0E000, 0x0FAFF), (0x0FB07, 0x0FB12),
    (0x0FB18, 0x0FB1C), (0x0FB37, 0x0FB37), (0x0FB3D, 0x0FB3D), (0x0FB3F, 0x0FB3F),
    (0x0FB42, 0x0FB42), (0x0FB45, 0x0FB45), (0x0FBC3, 0x0FBD2), (0x0FD90, 0x0FD91),
    (0x0FDC8, 0x0FDCE), (0x0FDD0, 0x0FDEF), (0x0FE00, 0x0FE1F), (0x0FE30, 0x0FE6F),
    (0x0FE75, 0x0FE75), (0x0FEFD, 0x0FEFE), (0x0FF00, 0x0FF60), (0x0FFBF, 0x0FFC1),
    (0x0FFC8, 0x0FFC9), (0x0FFD0, 0x0FFD1), (0x0FFD8, 0x0FFD9), (0x0FFDD, 0x0FFE7),
    (0x0FFEF, 0x0FFF8), (0x0FFFD, 0x0FFFF), (0x1000C, 0x1000C), (0x10027, 0x10027),
    (0x1003B, 0x1003B), (0x1003E, 0x1003E), (0x1004E, 0x1004F), (0x1005E, 0x1007F),
    (0x100FB, 0x100FF), (0x10103, 0x10106), (0x10134, 0x10136), (0x1018F, 0x1018F),
    (0x1019D, 0x1019F), (0x101A1, 0x101CF), (0x101FE, 0x1027F), (0x1029D, 0x1029F),
    (0x102D1, 0x102DF), (0x102FC, 0x102FF), (0x10324, 0x1032C), (0x1034B, 0x1034F),
    (0x1037B, 0x1037F), (0x1039E, 0x1039E), (0x103C4, 0x103C7), (0x103D6, 0x103FF),
    (0x1049E, 0x1049F), (0x104AA, 0x104AF), (0x104D4, 0x104D7), (0x104FC, 0x104FF),
    (0x10528, 0x1052F), (0x10564, 0x1056E), (0x1057B, 0x1057B), (0x1058B, 0x1058B),
    (0x10593, 0x10593), (0x10596, 0x10596), (0x105A2, 0x105A2), (0x105B2, 0x105B2),
    (0x105BA, 0x105BA), (0x105BD, 0x105FF), (0x10737, 0x1073F), (0x10756, 0x1075F),
    (0x10768, 0x1077F), (0x10786, 0x10786), (0x107B1, 0x107B1), (0x107BB, 0x107FF),
    (0x10806, 0x10807), (0x10809, 0x10809), (0x10836, 0x10836), (0x10839, 0x1083B),
    (0x1083D, 0x1083E), (0x10856, 0x10856), (0x1089F, 0x108A6), (0x108B0, 0x108DF),
    (0x108F3, 0x108F3), (0x108F6, 0x108FA), (0x1091C, 0x1091E), (0x1093A, 0x1093E),
    (0x10940, 0x1097F), (0x109B8, 0x109BB), (0x109D0, 0x109D1), (0x10A04, 0x10A04),
    (0x10A07, 0x10A0B), (0x10A14, 0x10A14), (0x10A18, 0x10A18), (0x10A36, 0x10A37),
    (0x10A3B, 0x10A3E), (0x10A49, 0x10A4F), (0x10A59, 0x10A5F), (0x10AA0, 0x10ABF),
    (0x10AE7, 0x10AEA), (0x10AF7, 0x10AFF), (0x10B36, 0x10B38), (0x10B56, 0x10B57),
    (0x10B73, 0x10B77), (0x10B92, 0x10B98), (0x10B9D, 0x10BA8), (0x10BB0, 0x10BFF),
    (0x10C49, 0x10C7F), (0x10CB3, 0x10CBF), (0x10CF3, 0x10CF9), (0x10D28, 0x10D2F),
    (0x10D3A, 0x10E5F), (0x10E7F, 0x10E7F), (0x10EAA, 0x10EAA), (0x10EAE, 0x10EAF),
    (0x10EB2, 0x10EFF), (0x10F28, 0x10F2F), (0x10F5A, 0x10F6F), (0x10F8A, 0x10FAF),
    (0x10FCC, 0x10FDF), (0x10FF7, 0x10FFF), (0x1104E, 0x11051), (0x11076, 0x1107E),
    (0x110C3, 0x110CC), (0x110CE, 0x110CF), (0x110E9, 0x110EF), (0x110FA, 0x110FF),
    (0x11135, 0x11135), (0x11148, 0x1114F), (0x11177, 0x1117F), (0x111E0, 0x111E0),
    (0x111F5, 0x111FF), (0x11212, 0x11212), (0x1123F, 0x1127F), (0x11287, 0x11287),
    (0x11289, 0x11289), (0x1128E, 0x1128E), (0x1129E, 0x1129E), (0x112AA, 0x112AF),
    (0x112EB, 0x112EF), (0x112FA, 0x112FF), (0x11304, 0x11304), (0x1130D, 0x1130E),
    (0x11311, 0x11312), (0x11329, 0x11329), (0x11331, 0x11331), (0x11334, 0x11334),
    (0x1133A, 0x1133A), (0x11345, 0x11346), (0x11349, 0x1134A), (0x1134E, 0x1134F),
    (0x11351, 0x11356), (0x11358, 0x1135C), (0x11364, 0x11365), (0x1136D, 0x1136F),
    (0x11375, 0x113FF), (0x1145C, 0x1145C), (0x11462, 0x1147F), (0x114C8, 0x114CF),
    (0x114DA, 0x1157F), (0x115B6, 0x115B7), (0x115DE, 0x115FF), (0x11645, 0x1164F),
    (0x1165A, 0x1165F), (0x1166D, 0x1167F), (0x116BA, 0x116BF), (0x116CA, 0x116FF),
    (0x1171B, 0x1171C), (0x1172C, 0x1172F), (0x11747, 0x117FF), (0x1183C, 0x1189F),
    (0x118F3, 0x118FE), (0x11907, 0x11908), (0x1190A, 0x1190B), (0x11914, 0x11914),
    (0x11917, 0x11917), (0x11936, 0x11936), (0x11939, 0x1193A), (0x11947, 0x1194F),
    (0x1195A, 0x1199F), (0x119A8, 0x119A9), (0x119D8, 0x119D9), (0x119E5, 0x119FF),
    (0x11A48, 0x11A4F), (0x11AA3, 0x11AAF), (0x11AF9, 0x11BFF), (0x11C09, 0x11C09),
    (0x11C37, 0x11C37), (0x11C46, 0x11C4F), (0x11C6D, 0x11C6F), (0x11C90, 0x11C91),
    (0x11CA8, 0x11CA8), (0x11CB7, 0x11CFF), (0x11D07, 0x11D07), (0x11D0A, 0x11D0A),
    (0x11D37, 0x11D39), (0x11D3B, 0x11D3B), (0x11D3E, 0x11D3E), (0x11D48, 0x11D4F),
    (0x11D5A, 0x11D5F), (0x11D66, 0x11D66), (0x11D69, 0x11D69), (0x11D8F, 0x11D8F),
    (0x11D92, 0x11D92), (0x11D99, 0x11D9F), (0x11DAA, 0x11EDF), (0x11EF9, 0x11FAF),
    (0x11FB1, 0x11FBF), (0x11FF2, 0x11FFE), (0x1239A, 0x123FF), (0x1246F, 0x1246F),
    (0x12475, 0x1247F), (0x12544, 0x12F8F), (0x12FF3, 0x12FFF), (0x1342F, 0x1342F),
    (0x13439, 0x143FF), (0x14647, 0x167FF), (0x16A39, 0x16A3F), (0x16A5F, 0x16A5F),
    (0x16A6A, 0x16A6D), (0x16ABF, 0x16ABF), (0x16ACA, 0x16ACF), (0x16AEE, 0x16AEF),
    (0x16AF6, 0x16AFF), (0x16B46, 0x16B4F), (0x16B5A, 0x16B5A), (0x16B62, 0x16B62),
    (0x16B78, 0x16B7C), (0x16B90, 0x16E3F), (0x16E9B, 0x16EFF), (0x16F4B, 0x16F4E),
    (0x16F88, 0x16F8E), (0x16FA0, 0x1BBFF), (0x1BC6B, 0x1BC6F), (0x1BC7D, 0x1BC7F),
    (0x1BC89, 0x1BC8F), (0x1BC9A, 0x1BC9B), (0x1BCA4, 0x1CEFF), (0x1CF2E, 0x1CF2F),
    (0x1CF47, 0x1CF4F), (0x1CFC4, 0x1CFFF), (0x1D0F6, 0x1D0FF), (0x1D127, 0x1D128),
    (0x1D1EB, 0x1D1FF), (0x1D246, 0x1D2DF), (0x1D2F4, 0x1D2FF), (0x1D357, 0x1D35F),
    (0x1D379, 0x1D3FF), (0x1D455, 0x1D455), (0x1D49D, 0x1D49D), (0x1D4A0, 0x1D4A1),
    (0x1D4A3, 0x1D4A4), (0x1D4A7, 0x1D4A8), (0x1D4AD, 0x1D4AD), (0x1D4BA, 0x1D4BA),
    (0x1D4BC, 0x1D4BC), (0x1D4C4, 0x1D4C4), (0x1D506, 0x1D506), (0x1D50B, 0x1D50C),
    (0x1D515, 0x1D515), (0x1D51D, 0x1D51D), (0x1D53A, 0x1D53A), (0x1D53F, 0x1D53F),
    (0x1D545, 0x1D545), (0x1D547, 0x1D549), (0x1D551, 0x1D551), (0x1D6A6, 0x1D6A7),
    (0x1D7CC, 0x1D7CD), (0x1DA8C, 0x1DA9A), (0x1DAA0, 0x1DAA0), (0x1DAB0, 0x1DEFF),
    (0x1DF1F, 0x1DFFF), (0x1E007, 0x1E007), (0x1E019, 0x1E01A), (0x1E022, 0x1E022),
    (0x1E025, 0x1E025), (0x1E02B, 0x1E0FF), (0x1E12D, 0x1E12F), (0x1E13E, 0x1E13F),
    (0x1E14A, 0x1E14D), (0x1E150, 0x1E28F), (0x1E2AF, 0x1E2BF), (0x1E2FA, 0x1E2FE),
    (0x1E300, 0x1E7DF), (0x1E7E7, 0x1E7E7), (0x1E7EC, 0x1E7EC), (0x1E7EF, 0x1E7EF),
    (0x1E7FF, 0x1E7FF), (0x1E8C5, 0x1E8C6), (0x1E8D7, 0x1E8FF), (0x1E94C, 0x1E94F),
    (0x1E95A, 0x1E95D), (0x1E960, 0x1EC70), (0x1ECB5, 0x1ED00), (0x1ED3E, 0x1EDFF),
    (0x1EE04, 0x1EE04), (0x1EE20, 0x1EE20), (0x1EE23, 0x1EE23), (0x1EE25, 0x1EE26),
    (0x1EE28, 0x1EE28), (0x1EE33, 0x1EE33), (0x1EE38, 0x1EE38), (0x1EE3A, 0x1EE3A),
    (0x1EE3C, 0x1EE41), (0x1EE43, 0x1EE46), (0x1EE48, 0x1EE48), (0x1EE4A, 0x1EE4A),
    (0x1EE4C, 0x1EE4C), (0x1EE50, 0x1EE50), (0x1EE53, 0x1EE53), (0x1EE55, 0x1EE56),
    (0x1EE58, 0x1EE58), (0x1EE5A, 0x1EE5A), (0x1EE5C, 0x1EE5C), (0x1EE5E, 0x1EE5E),
    (0x1EE60, 0x1EE60), (0x1EE63, 0x1EE63), (0x1EE65, 0x1EE66), (0x1EE6B, 0x1EE6B),
    (0x1EE73, 0x1EE73), (0x1EE78, 0x1EE78), (0x1EE7D, 0x1EE7D), (0x1EE7F, 0x1EE7F),
    (0x1EE8A, 0x1EE8A), (0x1EE9C, 0x1EEA0), (0x1EEA4, 0x1EEA4), (0x1EEAA, 0x1EEAA),
    (0x1EEBC, 0x1EEEF), (0x1EEF2, 0x1EFFF), (0x1F004, 0x1F004), (0x1F02C, 0x1F02F),
    (0x1F094, 0x1F09F), (0x1F0AF, 0x1F0B0), (0x1F0C0, 0x1F0C0), (0x1F0CF, 0x1F0D0),
    (0x1F0F6, 0x1F10A), (0x1F110, 0x1F12D), (0x1F130, 0x1F169), (0x1F170, 0x1F1AC),
    (0x1F1AE, 0x1F1E5), (0x1F200, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3), (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E), (0x1F440, 0x1F440), (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D), (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F), (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2), (0x1F6D5, 0x1F6DF), (0x1F6EB, 0x1F6EF),
    (0x1F6F4, 0x1F6FF), (0x1F774, 0x1F77F), (0x1F7D9, 0x1F7FF), (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F), (0x1F85A, 0x1F85F), (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8AF),
    (0x1F8B2, 0x1F8FF), (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945), (0x1F947, 0x1F9FF),
    (0x1FA54, 0x1FA5F), (0x1FA6E, 0x1FAFF), (0x1FB93, 0x1FB93), (0x1FBCB, 0x1FBEF),
    (0x1FBFA, 0xE0000), (0xE0002, 0xE001F), (0xE0080, 0x10FFFF),
];

/// True when `c` is East Asian Fullwidth, Wide or Ambiguous.
pub(crate) fn is_wide_or_ambiguous(c: char) -> bool {
    let cp = u32::from(c);
    WIDE_OR_AMBIGUOUS
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for pair in WIDE_OR_AMBIGUOUS.windows(2) {
            let ((lo, hi), (next_lo, _)) = (pair[0], pair[1]);
            assert!(lo <= hi);
            assert!(hi < next_lo);
        }
    }

    #[test]
    fn lookup_hits_range_edges() {
        assert!(is_wide_or_ambiguous('\u{00A1}'));
        assert!(!is_wide_or_ambiguous('\u{00A2}'));
        assert!(is_wide_or_ambiguous('\u{FF00}'));
        assert!(is_wide_or_ambiguous('\u{FF60}'));
        assert!(!is_wide_or_ambiguous('\u{FF61}'));
        assert!(!is_wide_or_ambiguous('A'));
    }
}
