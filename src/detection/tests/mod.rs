mod render_test;
