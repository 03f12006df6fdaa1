mod type_shape_tests;
