mod calculation;
