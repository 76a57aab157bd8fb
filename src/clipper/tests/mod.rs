mod clipper_offset_tests;
mod clipper_tests;
