//! The bundled ISCC-NBS table: every category with its anchor color, the
//! basic hues it is filed under and common names shoppers use for it.
//!
//! <https://en.wikipedia.org/wiki/ISCC%E2%80%93NBS_system>

use super::BasicHue::{self, *};

/// Category name, anchor hex, color range, analogous names.
pub(super) type Record = (&'static str, &'static str, &'static [BasicHue], &'static [&'static str]);

#[rustfmt::skip]
pub(super) const ISCC_NBS: &[Record] = &[
    ("Vivid Pink", "#FFB5BA", &[Pink], &[]),
    ("Strong Pink", "#EA9399", &[Pink], &[]),
    ("Deep Pink", "#E4717A", &[Pink], &["Coral"]),
    ("Light Pink", "#F9CCCA", &[Pink], &[]),
    ("Moderate Pink", "#DEA5A4", &[Pink], &[]),
    ("Dark Pink", "#C08081", &[Pink], &[]),
    ("Pale Pink", "#EAD8D7", &[Pink], &[]),
    ("Grayish Pink", "#C4AEAD", &[Pink], &[]),
    ("Pinkish White", "#EAE3E1", &[Pink, White], &["Blush"]),
    ("Pinkish Gray", "#C1B6B3", &[Pink, Grey], &[]),
    ("Vivid Red", "#BE0032", &[Red], &["Fire Engine Red"]),
    ("Strong Red", "#BC3F4A", &[Red], &["Amaranth", "Maroon", "Vermillion"]),
    ("Deep Red", "#841B2D", &[Red], &["Cardinal", "Crimson"]),
    ("Very Deep Red", "#5C0923", &[Red], &["Blood Red", "Maroon"]),
    ("Moderate Red", "#AB4E52", &[Red], &[]),
    ("Dark Red", "#722F37", &[Red], &["Burgundy"]),
    ("Very Dark Red", "#3F1728", &[Brown, Red], &["Barn Red"]),
    ("Light Grayish Red", "#AD8884", &[Red], &[]),
    ("Grayish Red", "#905D5D", &[Brown, Red], &["Indian Red", "Rose Taupe"]),
    ("Dark Grayish Red", "#543D3F", &[Brown, Red], &[]),
    ("Blackish Red", "#2E1D21", &[Brown, Red], &[]),
    ("Reddish Gray", "#8F817F", &[Red, Grey], &["Taupe"]),
    ("Dark Reddish Gray", "#5C504F", &[Red, Grey], &[]),
    ("Reddish Black", "#282022", &[Black, Grey], &[]),
    ("Vivid Yellowish Pink", "#FFB7A5", &[Pink], &["Coral", "Salmon"]),
    ("Strong Yellowish Pink", "#F99379", &[Pink], &["Coral"]),
    ("Deep Yellowish Pink", "#E66721", &[Pink, Red], &["Coral"]),
    ("Light Yellowish Pink", "#F4C2C2", &[Pink], &[]),
    ("Moderate Yellowish Pink", "#D9A6A9", &[Pink], &["Cantaloupe"]),
    ("Dark Yellowish Pink", "#C48379", &[Pink], &[]),
    ("Pale Yellowish Pink", "#ECD5C5", &[Pink], &[]),
    ("Grayish Yellowish Pink", "#C7ADA3", &[Pink], &["Silver Pink"]),
    ("Brownish Pink", "#C2AC99", &[Pink], &[]),
    ("Vivid Reddish Orange", "#E25822", &[Orange, Red], &["Orangered", "Scarlet", "Tomato", "Vermillion"]),
    ("Strong Reddish Orange", "#D9603B", &[Orange, Red], &["Salmon"]),
    ("Deep Reddish Orange", "#AA381E", &[Brown, Orange, Red], &[]),
    ("Moderate Reddish Orange", "#CB6D51", &[Orange], &[]),
    ("Dark Reddish Orange", "#9E4732", &[Brown, Orange], &["Redwood"]),
    ("Grayish Reddish Orange", "#B4745E", &[Orange], &[]),
    ("Strong Reddish Brown", "#882D17", &[Brown, Red], &[]),
    ("Deep Reddish Brown", "#56070C", &[Brown, Red], &["Barn Red", "Blood Red", "Garnet", "Maroon"]),
    ("Light Reddish Brown", "#A87C6D", &[Brown], &[]),
    ("Moderate Reddish Brown", "#79443B", &[Brown], &[]),
    ("Dark Reddish Brown", "#3E1D1E", &[Brown], &[]),
    ("Light Grayish Reddish Brown", "#977F73", &[Brown], &[]),
    ("Grayish Reddish Brown", "#674C47", &[Brown], &[]),
    ("Dark Grayish Reddish Brown", "#43302E", &[Brown], &[]),
    ("Vivid Orange", "#F38400", &[Orange], &[]),
    ("Brilliant Orange", "#FD943F", &[Orange], &[]),
    ("Strong Orange", "#ED872D", &[Orange], &[]),
    ("Deep Orange", "#BE6516", &[Brown, Orange], &[]),
    ("Light Orange", "#FAB57F", &[Orange], &[]),
    ("Moderate Orange", "#D99058", &[Orange], &[]),
    ("Brownish Orange", "#AE6938", &[Brown, Orange], &[]),
    ("Strong Brown", "#80461B", &[Brown], &[]),
    ("Deep Brown", "#593319", &[Brown], &[]),
    ("Light Brown", "#A67B5B", &[Brown], &[]),
    ("Moderate Brown", "#6F4E37", &[Brown], &[]),
    ("Dark Brown", "#422518", &[Brown], &[]),
    ("Light Grayish Brown", "#958070", &[Brown], &[]),
    ("Grayish Brown", "#635147", &[Brown], &[]),
    ("Dark Grayish Brown", "#3E322C", &[Brown], &[]),
    ("Light Brownish Gray", "#8E8279", &[Grey], &[]),
    ("Brownish Gray", "#5B504F", &[Grey], &[]),
    ("Brownish Black", "#28201C", &[Black, Grey], &[]),
    ("Vivid Orange Yellow", "#F6A600", &[Yellow], &[]),
    ("Brilliant Orange Yellow", "#FFC14F", &[Yellow], &["Goldenrod"]),
    ("Strong Orange Yellow", "#EAA221", &[Orange, Yellow], &["Goldenrod"]),
    ("Deep Orange Yellow", "#C98500", &[Orange, Yellow], &[]),
    ("Light Orange Yellow", "#FBC97F", &[Orange, Yellow], &[]),
    ("Moderate Orange Yellow", "#E3A857", &[Orange, Yellow], &[]),
    ("Dark Orange Yellow", "#BE8A3D", &[Orange, Yellow], &[]),
    ("Pale Orange Yellow", "#FAD6A5", &[Orange, Yellow], &[]),
    ("Strong Yellowish Brown", "#996515", &[Brown], &[]),
    ("Deep Yellowish Brown", "#654522", &[Brown], &[]),
    ("Light Yellowish Brown", "#C19A6B", &[Brown], &[]),
    ("Moderate Yellowish Brown", "#826644", &[Brown], &[]),
    ("Dark Yellowish Brown", "#4B3621", &[Brown], &[]),
    ("Light Grayish Yellowish Brown", "#AE9B82", &[Brown], &[]),
    ("Grayish Yellowish Brown", "#7E6D5A", &[Brown], &[]),
    ("Dark Grayish Yellowish Brown", "#483C32", &[Brown], &[]),
    ("Vivid Yellow", "#F3C300", &[Yellow], &[]),
    ("Brilliant Yellow", "#FADA5E", &[Yellow], &[]),
    ("Strong Yellow", "#D4AF37", &[Yellow], &["Ochre"]),
    ("Deep Yellow", "#AF8D13", &[Yellow], &["Ochre"]),
    ("Light Yellow", "#F8DE7E", &[Yellow], &[]),
    ("Moderate Yellow", "#C9AE5D", &[Yellow], &[]),
    ("Dark Yellow", "#AB9144", &[Yellow], &[]),
    ("Pale Yellow", "#F3E5AB", &[Yellow], &["Bone", "Parchment"]),
    ("Grayish Yellow", "#C2B280", &[Yellow], &["Bone", "Parchment"]),
    ("Dark Grayish Yellow", "#A18F60", &[Yellow], &["Bone"]),
    ("Yellowish White", "#F0EAD6", &[White], &["Bone", "Champagne", "Cream", "Ivory"]),
    ("Yellowish Gray", "#BFB8A5", &[Grey], &["Bone"]),
    ("Light Olive Brown", "#967117", &[Brown, Olive], &[]),
    ("Moderate Olive Brown", "#6C541E", &[Brown, Olive], &["Golden Brown"]),
    ("Dark Olive Brown", "#3B3121", &[Brown, Olive], &[]),
    ("Vivid Greenish Yellow", "#DCD300", &[Yellow], &[]),
    ("Brilliant Greenish Yellow", "#E9E450", &[Yellow], &[]),
    ("Strong Greenish Yellow", "#BEB72E", &[Green, Yellow], &[]),
    ("Deep Greenish Yellow", "#9B9400", &[Green, Yellow], &[]),
    ("Light Greenish Yellow", "#EAE679", &[Yellow], &["Bone"]),
    ("Moderate Greenish Yellow", "#B9B459", &[Yellow], &["Bone", "Khaki"]),
    ("Dark Greenish Yellow", "#98943E", &[Green, Yellow], &["Khaki"]),
    ("Pale Greenish Yellow", "#EBE8A4", &[Yellow], &["Bone"]),
    ("Grayish Greenish Yellow", "#B9B57D", &[Yellow], &["Bone"]),
    ("Light Olive", "#867E36", &[Olive], &[]),
    ("Moderate Olive", "#665D1E", &[Olive], &["Green Gold"]),
    ("Dark Olive", "#403D21", &[Olive], &[]),
    ("Light Grayish Olive", "#8C8767", &[Olive], &[]),
    ("Grayish Olive", "#5B5842", &[Olive], &[]),
    ("Dark Grayish Olive", "#363527", &[Olive], &[]),
    ("Light Olive Gray", "#8A8776", &[Grey, Olive], &[]),
    ("Olive Gray", "#57554C", &[Grey, Olive], &[]),
    ("Olive Black", "#25241D", &[Black, Grey], &["Charcoal"]),
    ("Vivid Yellow Green", "#8DB600", &[Green], &["Yellow Green"]),
    ("Brilliant Yellow Green", "#BDDA57", &[Green], &["Yellow Green"]),
    ("Strong Yellow Green", "#7E9F2E", &[Green], &["Yellow Green"]),
    ("Deep Yellow Green", "#467129", &[Green], &["Yellow Green"]),
    ("Light Yellow Green", "#C9DC89", &[Green], &["Yellow Green"]),
    ("Moderate Yellow Green", "#8A9A5B", &[Green], &["Yellow Green"]),
    ("Pale Yellow Green", "#DADFB7", &[Green], &["Yellow Green"]),
    ("Grayish Yellow Green", "#8F9779", &[Green], &["Yellow Green"]),
    ("Strong Olive Green", "#404F00", &[Green, Olive], &[]),
    ("Deep Olive Green", "#232F00", &[Green, Olive], &[]),
    ("Moderate Olive Green", "#4A5D23", &[Green, Olive], &[]),
    ("Dark Olive Green", "#2B3D26", &[Green, Olive], &[]),
    ("Grayish Olive Green", "#515744", &[Green, Olive], &[]),
    ("Dark Grayish Olive Green", "#31362B", &[Green, Olive], &[]),
    ("Vivid Yellowish Green", "#27A64C", &[Green], &["Yellow Green"]),
    ("Brilliant Yellowish Green", "#83D37D", &[Green], &["Lime"]),
    ("Strong Yellowish Green", "#44944A", &[Green], &[]),
    ("Deep Yellowish Green", "#00622D", &[Green], &[]),
    ("Very Deep Yellowish Green", "#003118", &[Green], &[]),
    ("Very Light Yellowish Green", "#B6E5AF", &[Green], &["Mint"]),
    ("Light Yellowish Green", "#93C592", &[Green], &["Mint"]),
    ("Moderate Yellowish Green", "#679267", &[Green], &["Mint"]),
    ("Dark Yellowish Green", "#355E3B", &[Green], &["Mint"]),
    ("Very Dark Yellowish Green", "#173620", &[Green], &[]),
    ("Vivid Green", "#008856", &[Green], &["Emerald"]),
    ("Brilliant Green", "#3EB489", &[Green], &["Leaf Green"]),
    ("Strong Green", "#007959", &[Green], &[]),
    ("Deep Green", "#00543D", &[Green], &[]),
    ("Very Light Green", "#8ED1B2", &[Green], &[]),
    ("Light Green", "#6AAB8E", &[Green], &[]),
    ("Moderate Green", "#3B7861", &[Green], &[]),
    ("Dark Green", "#1B4D3E", &[Green], &[]),
    ("Very Dark Green", "#1C352D", &[Green], &[]),
    ("Very Pale Green", "#C7E6D7", &[Green], &[]),
    ("Pale Green", "#8DA399", &[Green], &[]),
    ("Grayish Green", "#5E716A", &[Green], &["Pine"]),
    ("Dark Grayish Green", "#3A4B47", &[Green], &["Evergreen"]),
    ("Blackish Green", "#1A2421", &[Green, Black], &[]),
    ("Greenish White", "#DFEDE8", &[Green, Grey, White], &[]),
    ("Light Greenish Gray", "#B2BEB5", &[Green, Grey], &[]),
    ("Greenish Gray", "#7D8984", &[Green, Grey], &[]),
    ("Dark Greenish Gray", "#4E5755", &[Green, Grey], &[]),
    ("Greenish Black", "#1E2321", &[Black, Grey], &["Onyx"]),
    ("Vivid Bluish Green", "#008882", &[Green, Turquoise], &["Teal"]),
    ("Brilliant Bluish Green", "#00A693", &[Green, Turquoise], &["Teal"]),
    ("Strong Bluish Green", "#007A74", &[Green, Turquoise], &["Teal"]),
    ("Deep Bluish Green", "#00443F", &[Green, Turquoise], &["Teal"]),
    ("Very Light Bluish Green", "#96DED1", &[Green, Turquoise], &["Aqua", "Teal"]),
    ("Light Bluish Green", "#66ADA4", &[Green, Turquoise], &["Aqua", "Teal"]),
    ("Moderate Bluish Green", "#317873", &[Green, Turquoise], &["Teal"]),
    ("Dark Bluish Green", "#004B49", &[Green, Turquoise], &["Teal"]),
    ("Very Dark Bluish Green", "#002A29", &[Green, Turquoise], &["Teal"]),
    ("Vivid Greenish Blue", "#0085A1", &[Blue, Turquoise], &["Cerulean", "Cyan"]),
    ("Brilliant Greenish Blue", "#239EBA", &[Blue, Turquoise], &["Cyan"]),
    ("Strong Greenish Blue", "#007791", &[Blue, Turquoise], &["Cerulean", "Cyan"]),
    ("Deep Greenish Blue", "#2E8495", &[Blue, Turquoise], &["Cerulean Blue", "Cyan"]),
    ("Very Light Greenish Blue", "#9CD1DC", &[Blue, Turquoise], &["Cyan"]),
    ("Light Greenish Blue", "#66AABC", &[Blue, Turquoise], &["Cyan"]),
    ("Moderate Greenish Blue", "#367588", &[Blue, Turquoise], &["Cyan"]),
    ("Dark Greenish Blue", "#004958", &[Blue, Turquoise], &["Cyan"]),
    ("Very Dark Greenish Blue", "#002E3B", &[Blue, Turquoise], &["Cyan"]),
    ("Vivid Blue", "#00A1C2", &[Blue], &["Azure", "Celtic Blue", "Midnight", "Navy Blue", "Ultramarine"]),
    ("Brilliant Blue", "#4997D0", &[Blue], &["Cornflower Blue"]),
    ("Strong Blue", "#0067A5", &[Blue], &["Azure"]),
    ("Deep Blue", "#00416A", &[Blue], &["Azure", "Royal Blue", "Sapphire"]),
    ("Very Light Blue", "#A1CAF1", &[Blue], &[]),
    ("Light Blue", "#70A3CC", &[Blue], &["Celestial Blue"]),
    ("Moderate Blue", "#436B95", &[Blue], &["Steel Blue"]),
    ("Dark Blue", "#00304E", &[Blue], &["Cool Black", "Navy Blue", "Space Cadet"]),
    ("Very Pale Blue", "#BCD4E6", &[Blue, Grey], &[]),
    ("Pale Blue", "#91A3B0", &[Blue, Grey], &[]),
    ("Grayish Blue", "#536878", &[Blue, Grey], &[]),
    ("Dark Grayish Blue", "#36454F", &[Blue, Grey], &[]),
    ("Blackish Blue", "#202830", &[Blue, Black, Grey], &["Midnight"]),
    ("Bluish White", "#E9E9ED", &[Grey, White], &[]),
    ("Light Bluish Gray", "#B4BCC0", &[Grey], &[]),
    ("Bluish Gray", "#81878B", &[Grey], &[]),
    ("Dark Bluish Gray", "#51585E", &[Grey], &[]),
    ("Bluish Black", "#202428", &[Black, Grey], &[]),
    ("Vivid Purplish Blue", "#30267A", &[Blue], &["Neon Blue"]),
    ("Brilliant Purplish Blue", "#6C79B8", &[Blue], &[]),
    ("Strong Purplish Blue", "#545AA7", &[Blue], &["Ultramarine"]),
    ("Deep Purplish Blue", "#272458", &[Blue], &[]),
    ("Very Light Purplish Blue", "#B3BCE2", &[Blue], &["Periwinkle"]),
    ("Light Purplish Blue", "#8791BF", &[Blue], &[]),
    ("Moderate Purplish Blue", "#4E5180", &[Blue], &[]),
    ("Dark Purplish Blue", "#252440", &[Blue], &["Navy"]),
    ("Very Pale Purplish Blue", "#C0C8E1", &[Blue, Grey], &[]),
    ("Pale Purplish Blue", "#8C92AC", &[Blue, Grey], &[]),
    ("Grayish Purplish Blue", "#4C516D", &[Blue, Grey], &[]),
    ("Vivid Violet", "#9065CA", &[Purple], &["Amethyst", "Violet"]),
    ("Brilliant Violet", "#7E73B8", &[Purple], &["Amethyst", "Iris", "Violet"]),
    ("Strong Violet", "#604E97", &[Purple], &["Violet"]),
    ("Deep Violet", "#32174D", &[Purple], &["Violet"]),
    ("Very Light Violet", "#DCD0FF", &[Purple], &["Violet"]),
    ("Light Violet", "#8C82B6", &[Purple], &["Lavender", "Violet"]),
    ("Moderate Violet", "#604E81", &[Purple], &["Violet"]),
    ("Dark Violet", "#2F2140", &[Purple], &["Violet"]),
    ("Very Pale Violet", "#C4C3DD", &[Purple], &["Lavender", "Violet"]),
    ("Pale Violet", "#9690AB", &[Purple], &["Violet"]),
    ("Grayish Violet", "#554C69", &[Purple], &["Violet"]),
    ("Vivid Purple", "#9A4EAE", &[Pink, Purple], &["Magenta"]),
    ("Brilliant Purple", "#D399E6", &[Purple], &["Orchid"]),
    ("Strong Purple", "#875692", &[Purple], &[]),
    ("Deep Purple", "#602F6B", &[Purple], &[]),
    ("Very Deep Purple", "#401A4C", &[Purple], &[]),
    ("Very Light Purple", "#D5BADB", &[Purple], &[]),
    ("Light Purple", "#B695C0", &[Purple], &["Lilac", "Wisteria"]),
    ("Moderate Purple", "#86608E", &[Purple], &[]),
    ("Dark Purple", "#563C5C", &[Purple], &[]),
    ("Very Dark Purple", "#301934", &[Purple], &[]),
    ("Very Pale Purple", "#D6CADD", &[Purple], &["Lavender"]),
    ("Pale Purple", "#AA98A9", &[Purple], &[]),
    ("Grayish Purple", "#796878", &[Purple], &[]),
    ("Dark Grayish Purple", "#50404D", &[Purple], &[]),
    ("Blackish Purple", "#291E29", &[Purple, Black], &[]),
    ("Purplish White", "#E8E3E5", &[Grey, White], &[]),
    ("Light Purplish Gray", "#BFB9BD", &[Grey], &[]),
    ("Purplish Gray", "#8B8589", &[Grey], &[]),
    ("Dark Purplish Gray", "#5D555B", &[Grey], &[]),
    ("Purplish Black", "#242124", &[Black, Grey], &[]),
    ("Vivid Reddish Purple", "#870074", &[Pink], &["Magenta", "Rose"]),
    ("Strong Reddish Purple", "#9E4F88", &[Pink], &["Magenta"]),
    ("Deep Reddish Purple", "#702963", &[Pink], &["Magenta"]),
    ("Very Deep Reddish Purple", "#54194E", &[Pink], &["Magenta"]),
    ("Light Reddish Purple", "#B784A7", &[Pink], &["Magenta", "Plum"]),
    ("Moderate Reddish Purple", "#915C83", &[Pink], &["Magenta"]),
    ("Dark Reddish Purple", "#5D3954", &[Pink], &["Magenta"]),
    ("Very Dark Reddish Purple", "#341731", &[Pink], &["Magenta"]),
    ("Pale Reddish Purple", "#AA8A9E", &[Pink], &[]),
    ("Grayish Reddish Purple", "#836479", &[Pink], &[]),
    ("Brilliant Purplish Pink", "#FFC8D6", &[Pink], &[]),
    ("Strong Purplish Pink", "#E68FAC", &[Pink], &[]),
    ("Deep Purplish Pink", "#DE6FA1", &[Pink], &[]),
    ("Light Purplish Pink", "#EFBBCC", &[Pink], &["Rose"]),
    ("Moderate Purplish Pink", "#D597AE", &[Pink], &[]),
    ("Dark Purplish Pink", "#C17E91", &[Pink], &[]),
    ("Pale Purplish Pink", "#E8CCD7", &[Pink], &[]),
    ("Grayish Purplish Pink", "#C3A6B1", &[Pink], &["Pink Lavender"]),
    ("Vivid Purplish Red", "#CE4676", &[Pink, Red], &["Magenta"]),
    ("Strong Purplish Red", "#B3446C", &[Pink, Red], &["Magenta"]),
    ("Deep Purplish Red", "#78184A", &[Pink, Red], &["Magenta"]),
    ("Very Deep Purplish Red", "#54133B", &[Pink, Red], &["Magenta"]),
    ("Moderate Purplish Red", "#A8516E", &[Pink, Red], &["Magenta"]),
    ("Dark Purplish Red", "#673147", &[Pink, Red], &["Magenta"]),
    ("Very Dark Purplish Red", "#38152C", &[Pink, Red], &["Magenta"]),
    ("Light Grayish Purplish Red", "#AF868E", &[Pink, Red], &[]),
    ("Grayish Purplish Red", "#915F6D", &[Pink, Red], &["Lavender"]),
    ("White", "#F2F3F4", &[White], &[]),
    ("Light Gray", "#B9B8B5", &[Grey], &[]),
    ("Medium Gray", "#848482", &[Grey], &[]),
    ("Dark Gray", "#555555", &[Grey], &[]),
    ("Black", "#111111", &[Black], &["Ebony"]),  // official anchor is #222222, which is lighter than Greenish Black
];
